pub mod account;
pub mod campaigns;
pub mod contacts;
pub mod data_table;
pub mod login;
