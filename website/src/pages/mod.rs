pub mod apply;
pub mod fees;
pub mod home;
pub mod sponsorship;
