//! Tests for citation parsing.

use commedia::citation::normalize_citation;
use commedia::{Cantica, Citation, Error};

mod accepted_forms {
    use super::*;

    #[test]
    fn test_equivalent_forms_resolve_identically() {
        let inputs = ["Inferno V vv. 61–72", "Inferno 5 61-72", "inferno v vv. 61–72"];
        for input in inputs {
            let citation = Citation::parse(input).unwrap();
            assert_eq!(
                citation.as_tuple(),
                (Cantica::Inferno, 5, 61, 72),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_abbreviated_cantica() {
        assert_eq!(
            Citation::parse("Inf. V, 61-72").unwrap().as_tuple(),
            (Cantica::Inferno, 5, 61, 72)
        );
        assert_eq!(
            Citation::parse("Purg. XXXIII, vv. 142—145").unwrap().as_tuple(),
            (Cantica::Purgatorio, 33, 142, 145)
        );
        assert_eq!(
            Citation::parse("par. xxxiii 145").unwrap().as_tuple(),
            (Cantica::Paradiso, 33, 145, 145)
        );
    }

    #[test]
    fn test_cantica_by_ordinal() {
        assert_eq!(
            Citation::parse("II 1 1-6").unwrap().as_tuple(),
            (Cantica::Purgatorio, 1, 1, 6)
        );
        assert_eq!(
            Citation::parse("3 33 142-145").unwrap().as_tuple(),
            (Cantica::Paradiso, 33, 142, 145)
        );
    }

    #[test]
    fn test_separators_and_markers() {
        let expected = (Cantica::Inferno, 26, 118, 120);
        for input in [
            "Inferno XXVI, 118-120",
            "Inferno XXVI: vv. 118 - 120",
            "Inferno XXVI v. 118–120.",
            "INFERNO   xxvi   118\u{2014}120",
        ] {
            assert_eq!(Citation::parse(input).unwrap().as_tuple(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_from_str() {
        let citation: Citation = "Inferno 34 139".parse().unwrap();
        assert_eq!(citation.verses(), 139..=139);
    }
}

mod rejected_forms {
    use super::*;

    #[test]
    fn test_malformed() {
        for input in [
            "",
            "Inferno",
            "Inferno V",
            "61-72",
            "Inferno V vv. a-b",
            "Inferno 12",
            "Inferno 34",
            "Purgatorio 25",
            "Inferno 561",
        ] {
            assert!(
                matches!(Citation::parse(input), Err(Error::MalformedCitation(_))),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_canto_and_verse_need_a_separator() {
        assert_eq!(
            Citation::parse("Inferno 5,61").unwrap().as_tuple(),
            (Cantica::Inferno, 5, 61, 61)
        );
        assert!(matches!(Citation::parse("Inferno 561"), Err(Error::MalformedCitation(_))));
        assert!(matches!(Citation::parse("Paradiso xxxiii145"), Err(Error::MalformedCitation(_))));
    }

    #[test]
    fn test_unknown_cantica() {
        assert!(matches!(
            Citation::parse("Purgatory 5 1-3"),
            Err(Error::UnknownCantica(_))
        ));
        assert!(matches!(Citation::parse("IV 5 1-3"), Err(Error::UnknownCantica(_))));
    }

    #[test]
    fn test_canto_out_of_range() {
        assert!(matches!(
            Citation::parse("Inferno XXXV 1-3"),
            Err(Error::CantoOutOfRange {
                cantica: Cantica::Inferno,
                canto: 35,
                max: 34
            })
        ));
        assert!(matches!(
            Citation::parse("Purgatorio 0 1-3"),
            Err(Error::CantoOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reversed_range() {
        let err = Citation::parse("Inferno V vv. 72-61").unwrap_err();
        assert!(matches!(err, Error::InvalidVerseRange { start: 72, end: 61 }));
        assert!(err.to_string().contains("72-61"));
    }
}

mod normalization {
    use super::*;

    #[test]
    fn test_dash_variants() {
        for dash in ['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}'] {
            let text = format!("Inferno V 61{}72", dash);
            assert_eq!(normalize_citation(&text), "inferno v 61-72");
        }
    }

    #[test]
    fn test_display_is_canonical() {
        let a = Citation::parse("inferno v vv. 61–72").unwrap();
        let b = Citation::parse("Inferno 5 61-72").unwrap();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), "Inferno V, vv. 61-72");
    }
}
