pub mod markings;
