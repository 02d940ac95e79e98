pub mod lift;
