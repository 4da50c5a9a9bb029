pub mod panel;
pub mod pointer;
