//! Tests for structural segmentation of page streams.

use commedia::config::NoiseConfig;
use commedia::labels::to_roman;
use commedia::segment::{NoiseFilter, StructuralSegmenter};
use commedia::Cantica;

fn segmenter() -> StructuralSegmenter {
    StructuralSegmenter::new(NoiseFilter::default_patterns())
}

fn fixture_pages() -> Vec<&'static str> {
    vec![
        "LA DIVINA COMMEDIA\nDANTE ALIGHIERI\nPREFAZIONE\nQuesta edizione riproduce il testo della vulgata.\n1",
        "INFERNO\nCANTO PRIMO\nNel mezzo del cammin di nostra vita\nmi ritrovai per una selva oscura,\nché la diritta via era smarrita.\n2",
        "INFERNO\nAhi quanto a dir qual era è cosa dura\nRaffaello. Dante nel Parnaso.\nesta selva selvaggia e aspra e forte\nche nel pensier rinova la paura!\n3",
        "CANTO SECONDO\nLo giorno se n'andava, e l'aere bruno\ntoglieva li animai che sono in terra\nda le fatiche loro; e io sol uno\n4",
        "PURGATORIO\nCANTO PRIMO\nPer correr miglior acque alza le vele\nomai la navicella del mio ingegno,\nche lascia dietro a sé mar sì crudele;\n5",
        "PARADISO\nCANTO PRIMO\nLa gloria di colui che tutto move\nper l'universo penetra, e risplende\nin una parte più e meno altrove.\n6",
    ]
}

mod boundaries {
    use super::*;

    #[test]
    fn test_cantos_numbered_by_appearance() {
        let cantos = segmenter().segment(&fixture_pages());
        let keys: Vec<(Cantica, u32)> = cantos.iter().map(|c| (c.cantica, c.canto)).collect();
        assert_eq!(
            keys,
            vec![
                (Cantica::Inferno, 1),
                (Cantica::Inferno, 2),
                (Cantica::Purgatorio, 1),
                (Cantica::Paradiso, 1),
            ]
        );
    }

    #[test]
    fn test_running_header_does_not_close_canto() {
        let cantos = segmenter().segment(&fixture_pages());
        let first = &cantos[0];
        assert_eq!(first.lines.len(), 6);
        assert_eq!(first.lines[3], "Ahi quanto a dir qual era è cosa dura");
        assert_eq!(first.pages, (2, 3));
    }

    #[test]
    fn test_new_cantica_closes_open_canto() {
        let cantos = segmenter().segment(&fixture_pages());
        assert_eq!(cantos[1].lines.len(), 3);
        assert_eq!(cantos[1].pages, (4, 4));
        assert_eq!(cantos[2].lines[0], "Per correr miglior acque alza le vele");
    }

    #[test]
    fn test_canto_heading_before_cantica_is_ignored() {
        let pages = vec![
            "CANTO PRIMO\nQuesto verso non appartiene a nessuna cantica",
            "INFERNO\nCANTO PRIMO\nNel mezzo del cammin di nostra vita",
        ];
        let cantos = segmenter().segment(&pages);
        assert_eq!(cantos.len(), 1);
        assert_eq!(cantos[0].canto, 1);
        assert_eq!(cantos[0].lines, vec!["Nel mezzo del cammin di nostra vita".to_string()]);
    }

    #[test]
    fn test_page_span_ends_on_last_verse_page() {
        let pages = vec![
            "INFERNO\nCANTO PRIMO\nNel mezzo del cammin di nostra vita\n1",
            "mi ritrovai per una selva oscura,\n2",
            "Raffaello. Dante nel Parnaso.\n3",
            "CANTO SECONDO\nLo giorno se n'andava, e l'aere bruno\n4",
        ];
        let cantos = segmenter().segment(&pages);
        assert_eq!(cantos[0].pages, (1, 2));
        assert_eq!(cantos[1].pages, (4, 4));
    }

    #[test]
    fn test_numbering_continues_past_canonical_count() {
        let mut pages = vec!["INFERNO".to_string()];
        for n in 1..=35 {
            pages.push(format!(
                "CANTO {}\nverso unico del canto numero {}",
                to_roman(n, true),
                n
            ));
        }
        let cantos = segmenter().segment(&pages);
        assert_eq!(cantos.len(), 35);
        assert_eq!(cantos[34].cantica, Cantica::Inferno);
        assert_eq!(cantos[34].canto, 35);
        assert_eq!(cantos[34].lines, vec!["verso unico del canto numero 35".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let pages: Vec<String> = Vec::new();
        assert!(segmenter().segment(&pages).is_empty());
    }

    #[test]
    fn test_heading_without_verses_yields_empty_canto() {
        let pages = vec!["INFERNO\nCANTO PRIMO\nCANTO SECONDO\nLo giorno se n'andava, e l'aere bruno"];
        let cantos = segmenter().segment(&pages);
        assert_eq!(cantos.len(), 2);
        assert!(cantos[0].lines.is_empty());
        assert_eq!(cantos[1].canto, 2);
    }
}

mod noise {
    use super::*;

    #[test]
    fn test_furniture_is_removed() {
        let cantos = segmenter().segment(&fixture_pages());
        for canto in &cantos {
            for line in &canto.lines {
                assert!(!line.starts_with("Raffaello"), "caption kept: {}", line);
                assert!(!line.chars().all(|c| c.is_ascii_digit()), "page number kept: {}", line);
                assert_ne!(line, "INFERNO");
            }
        }
    }

    #[test]
    fn test_front_matter_before_first_canto_is_dropped() {
        let cantos = segmenter().segment(&fixture_pages());
        assert!(cantos
            .iter()
            .flat_map(|c| c.lines.iter())
            .all(|l| !l.contains("vulgata")));
    }

    #[test]
    fn test_extra_pattern() {
        let config = NoiseConfig::default().with_pattern(r"^Tavola\s+[IVX]+$");
        let segmenter = StructuralSegmenter::new(NoiseFilter::new(&config).unwrap());
        let pages = vec!["INFERNO\nCANTO PRIMO\nTavola XII\nNel mezzo del cammin di nostra vita"];
        let cantos = segmenter.segment(&pages);
        assert_eq!(cantos[0].lines, vec!["Nel mezzo del cammin di nostra vita".to_string()]);
    }

    #[test]
    fn test_punctuation_only_line_is_not_a_verse() {
        let s = segmenter();
        assert!(!s.is_probable_verse("— . —"));
        assert!(!s.is_probable_verse("NOTE"));
        assert!(s.is_probable_verse("Ahi quanto a dir qual era è cosa dura"));
    }
}

mod collect {
    use super::*;

    #[test]
    fn test_collect_verses_ignores_headings() {
        let pages = vec![
            "INFERNO\nCANTO QUINTO\nCosì discesi del cerchio primaio\n41",
            "giù nel secondo, che men loco cinghia\nMichelangelo. Il Giudizio.\n42",
        ];
        assert_eq!(
            segmenter().collect_verses(&pages),
            vec![
                "Così discesi del cerchio primaio".to_string(),
                "giù nel secondo, che men loco cinghia".to_string(),
            ]
        );
    }
}
