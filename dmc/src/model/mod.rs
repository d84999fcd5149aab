pub mod algorithm;
pub mod availability;
pub mod constraint;
pub mod estimator;
pub mod generator;
pub mod home;
pub mod router;
pub mod selector;
pub mod tour;

#[cfg(test)]
pub(crate) mod test_ops;
