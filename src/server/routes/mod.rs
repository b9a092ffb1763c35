pub mod acronym;
