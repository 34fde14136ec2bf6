pub mod controller;
pub mod human;
pub mod random;

pub use controller::PlayerController;
pub use human::HumanController;
pub use random::RandomBot;
