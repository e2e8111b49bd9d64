pub mod api;
pub mod ds;
pub mod eval;
pub mod std_lib;
