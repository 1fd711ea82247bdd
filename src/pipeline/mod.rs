// Pipeline orchestration for full-corpus comparison runs.

pub mod compare;
