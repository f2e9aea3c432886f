use std::collections::HashMap;

use horn_sat::{
    config::{Config, HornDisjunction},
    context::Context,
    formula::Formula,
    reports::Decision,
};

mod horn {
    use super::*;

    fn valuations(signs: &[&'static str]) -> Vec<HashMap<&'static str, bool>> {
        (0..1_usize << signs.len())
            .map(|bits| {
                signs
                    .iter()
                    .enumerate()
                    .map(|(index, sign)| (*sign, bits & (1 << index) != 0))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rewrites_are_horn() {
        for text in ["p | q", "p -> q", "~(p | (q -> r)) & (r | ~s)", "T -> (F | p)"] {
            let formula = Formula::parse(text).unwrap();
            assert!(!formula.is_horn());
            assert!(formula.to_horn(HornDisjunction::DeMorgan).is_horn());
            assert!(formula.to_horn(HornDisjunction::Literal).is_horn());
        }
    }

    #[test]
    fn de_morgan_is_equivalent() {
        let signs = ["p", "q", "r", "s"];
        for text in [
            "p | q",
            "p -> (q | r)",
            "~(p | q) & ~r",
            "((p -> q) | (r & ~s)) -> ~(q | s)",
        ] {
            let formula = Formula::parse(text).unwrap();
            let horn = formula.to_horn(HornDisjunction::DeMorgan);

            for valuation in valuations(&signs) {
                assert_eq!(formula.evaluate(&valuation), horn.evaluate(&valuation), "{text}");
            }
        }
    }

    #[test]
    fn literal_is_not_equivalent() {
        let formula = Formula::parse("p | q").unwrap();
        let horn = formula.to_horn(HornDisjunction::Literal);

        let both = HashMap::from([("p", true), ("q", true)]);
        assert_eq!(formula.evaluate(&both), Ok(true));
        assert_eq!(horn.evaluate(&both), Ok(false));

        let neither = HashMap::from([("p", false), ("q", false)]);
        assert_eq!(formula.evaluate(&neither), Ok(false));
        assert_eq!(horn.evaluate(&neither), Ok(true));
    }

    #[test]
    fn disjunction_choice_changes_models() {
        let formula = Formula::parse("~(p | q) & ~r").unwrap();

        let mut ctx = Context::from_config(Config::default());
        let mut horn = ctx.horn(&formula);
        assert_eq!(horn.to_string(), "(~r & ~~(~p & ~q))");

        let Ok(Decision::Sat(model)) = ctx.solve_linear(&mut horn) else {
            panic!("Expected a model");
        };
        assert!(model.values().all(|value| !value));
        assert_eq!(formula.evaluate(&model), Ok(true));

        let mut config = Config::default();
        config.horn_disjunction.set(HornDisjunction::Literal);
        let mut ctx = Context::from_config(config);
        let mut horn = ctx.horn(&formula);
        assert_eq!(horn.to_string(), "(~r & ~~(p & q))");

        let Ok(Decision::Sat(model)) = ctx.solve_linear(&mut horn) else {
            panic!("Expected a model");
        };
        assert_eq!(model.get("p"), Some(&true));
        assert_eq!(model.get("q"), Some(&true));
        assert_eq!(model.get("r"), Some(&false));
        // A model of the rewrite, though not of the formula.
        assert_eq!(horn.evaluate(&model), Ok(true));
        assert_eq!(formula.evaluate(&model), Ok(false));
    }

    #[test]
    fn rewrite_order() {
        let formula = Formula::parse("(q | p) -> r").unwrap();
        let horn = formula.to_horn(HornDisjunction::DeMorgan);

        let signs = horn.signs().collect::<Vec<_>>();
        assert_eq!(signs, vec!["p", "q", "r"]);
        assert_eq!(horn.to_string(), "~(~(~p & ~q) & ~r)");
    }
}
