mod maximum_selector;
mod multinomial_logit_selector;
mod random_selector;
mod selector_config;

pub use maximum_selector::MaximumSelector;
pub use multinomial_logit_selector::MultinomialLogitSelector;
pub use random_selector::RandomSelector;
pub use selector_config::SelectorConfig;
