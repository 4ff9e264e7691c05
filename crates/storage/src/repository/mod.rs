pub mod hackathon;
pub mod participant;
pub mod team;
