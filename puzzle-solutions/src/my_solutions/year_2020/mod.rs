pub mod day_20;
