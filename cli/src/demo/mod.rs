pub mod handle_demo;
