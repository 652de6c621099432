pub mod relocation;
