use horn_sat::{formula::Formula, types::err::ParseError};

mod parse {
    use super::*;

    #[test]
    fn left_to_right_fold() {
        let formula = Formula::parse("a & b | c").unwrap();
        assert_eq!(formula.to_string(), "((a & b) | c)");

        let formula = Formula::parse("a | b & c").unwrap();
        assert_eq!(formula.to_string(), "((a | b) & c)");

        let formula = Formula::parse("a -> b -> c").unwrap();
        assert_eq!(formula.to_string(), "((a -> b) -> c)");
    }

    #[test]
    fn brackets_are_equivalent() {
        let round = Formula::parse("(p & (q | r))").unwrap();
        let square = Formula::parse("[p & [q | r]]").unwrap();
        let curly = Formula::parse("{p & {q | r}}").unwrap();
        let mixed = Formula::parse("(p & [q | r})").unwrap();

        assert_eq!(round.to_string(), square.to_string());
        assert_eq!(round.to_string(), curly.to_string());
        assert_eq!(round.to_string(), mixed.to_string());
    }

    #[test]
    fn whitespace_is_optional() {
        let tight = Formula::parse("~p->(q|r)&s").unwrap();
        let loose = Formula::parse("  ~ p  ->  ( q | r )  & s ").unwrap();
        assert_eq!(tight.to_string(), loose.to_string());
    }

    #[test]
    fn canonical_sharing() {
        let formula = Formula::parse("(p & q) | (q & p)").unwrap();
        // p, q, (p & q), and the root.
        assert_eq!(formula.len(), 4);
        assert_eq!(formula.to_string(), "((p & q) | (p & q))");

        let formula = Formula::parse("(p -> q) | (q -> p)").unwrap();
        assert_eq!(formula.len(), 5);
    }

    #[test]
    fn parse_is_stable() {
        let text = "~(p implies q) or [~r AND (s | T)]";
        let once = Formula::parse(text).unwrap();
        let twice = Formula::parse(&once.to_string()).unwrap();

        assert_eq!(once.to_string(), twice.to_string());
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn from_str() {
        let formula: Formula = "p & ~q".parse().unwrap();
        assert_eq!(formula.to_string(), "(p & ~q)");

        assert_eq!("p & ".parse::<Formula>().err(), Some(ParseError::MissingOperand));
    }

    #[test]
    fn errors() {
        assert_eq!(Formula::parse("\t\n").err(), Some(ParseError::Empty));
        assert_eq!(Formula::parse("[]").err(), Some(ParseError::EmptyGroup));
        assert_eq!(Formula::parse("p & ~").err(), Some(ParseError::Negation));
        assert_eq!(Formula::parse("and p").err(), Some(ParseError::MissingOperand));
        assert_eq!(Formula::parse("(p) (q)").err(), Some(ParseError::MissingConnective));
        assert_eq!(Formula::parse("{p | q").err(), Some(ParseError::UnmatchedOpen));
        assert_eq!(Formula::parse("p | q]").err(), Some(ParseError::UnmatchedClose));
    }
}
