pub mod hackathons;
pub mod teams;
