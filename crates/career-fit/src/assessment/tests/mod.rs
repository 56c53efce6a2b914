mod common;
mod policy;
mod session;
