//! # Table
//!
//! $$
//! \bar v_g=\frac{\sum_{i\in g} v_i\,w_i}{\sum_{i\in g} w_i}
//! $$
//!
pub mod averages;
pub mod frame;
pub mod sorted;
