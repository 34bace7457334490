pub mod check_demo_opts;
pub mod demo_opts;
pub mod read_demo_pars;
