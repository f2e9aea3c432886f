/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which records the name of the option and the bounds of the option alongside the value of the option.

```rust
# use horn_sat::config::{Config, Splitting};
let mut config = Config::default();
assert!(config.splitting.set(Splitting::Fixpoint));
assert_eq!(config.splitting.value, Splitting::Fixpoint);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod horn_disjunction;
pub use horn_disjunction::HornDisjunction;

mod splitting;
pub use splitting::Splitting;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How to rewrite a disjunction to Horn form.
    pub horn_disjunction: ConfigOption<HornDisjunction>,

    /// How often to scan a formula for nodes to split on.
    pub splitting: ConfigOption<Splitting>,

    /// The maximum number of splits during a solve, with zero for no limit.
    pub split_limit: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration rewrites disjunctions to equivalent formulas, and scans for nodes to split on once.
    fn default() -> Self {
        Config {
            horn_disjunction: ConfigOption {
                name: "horn_disjunction",
                min: HornDisjunction::MIN,
                max: HornDisjunction::MAX,
                value: HornDisjunction::DeMorgan,
            },

            splitting: ConfigOption {
                name: "splitting",
                min: Splitting::MIN,
                max: Splitting::MAX,
                value: Splitting::SinglePass,
            },

            split_limit: ConfigOption {
                name: "split_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },
        }
    }
}
