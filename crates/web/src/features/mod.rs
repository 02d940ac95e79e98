pub mod lifts;
