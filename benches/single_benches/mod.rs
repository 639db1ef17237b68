pub mod bench_searching;
pub mod bench_sorting;
pub mod bench_visits;
pub mod params;
