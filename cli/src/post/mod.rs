pub mod demo_result;
