use review_cards::cards::{
    build_cards, build_deck_with, classify, extract_highlights, Card, Role, Rules,
};
use review_cards::document::{Paragraph, Run};

fn topic(text: &str) -> Paragraph {
    Paragraph::new("Heading 1", vec![Run::plain(text)])
}

fn direction(text: &str) -> Paragraph {
    Paragraph::with_runs(vec![Run::bold(text)])
}

fn content(text: &str) -> Paragraph {
    Paragraph::with_runs(vec![Run::plain(text)])
}

fn blank() -> Paragraph {
    Paragraph::with_runs(vec![Run::plain("  \t ")])
}

fn assert_deck_invariants(cards: &[Card]) {
    for (index, card) in cards.iter().enumerate() {
        assert_eq!(card.id, format!("d{:05}", index + 1));
        assert!(!card.topic.is_empty());
        assert!(!card.direction.is_empty());
        assert!(!card.blocks.is_empty());
        for block in &card.blocks {
            assert!(!block.text.is_empty());
            assert!(block.highlights.len() <= 12);
            let mut lowered: Vec<String> =
                block.highlights.iter().map(|h| h.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            assert_eq!(lowered.len(), block.highlights.len());
            assert!(block.highlights.iter().all(|h| h.chars().count() >= 2));
        }
    }
}

#[cfg(test)]
mod segmentation_tests {
    use super::*;

    #[test]
    fn test_single_card_scenario() {
        let paragraphs = vec![
            topic("Physics"),
            direction("Definition"),
            content("Energy is conserved."),
        ];

        let cards = build_cards(&paragraphs);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "d00001");
        assert_eq!(cards[0].kind, "direction");
        assert_eq!(cards[0].topic, "Physics");
        assert_eq!(cards[0].direction, "Definition");
        assert_eq!(cards[0].blocks.len(), 1);
        assert_eq!(cards[0].blocks[0].text, "Energy is conserved.");
        assert!(cards[0].blocks[0].highlights.is_empty());
    }

    #[test]
    fn test_direction_before_topic_is_ignored() {
        let paragraphs = vec![
            direction("Definition"),
            content("Energy is conserved."),
            content("More text."),
        ];
        assert!(build_cards(&paragraphs).is_empty());
    }

    #[test]
    fn test_empty_direction_is_dropped() {
        let paragraphs = vec![
            topic("Physics"),
            direction("Definition"),
            direction("Evolution"),
            content("Ideas changed over time."),
        ];

        let cards = build_cards(&paragraphs);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "d00001");
        assert_eq!(cards[0].direction, "Evolution");
    }

    #[test]
    fn test_trailing_direction_without_content_is_dropped() {
        let paragraphs = vec![
            topic("Physics"),
            direction("Definition"),
            content("Energy is conserved."),
            direction("Future research"),
        ];
        let cards = build_cards(&paragraphs);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].direction, "Definition");
    }

    #[test]
    fn test_ids_continue_across_topics() {
        let paragraphs = vec![
            topic("Physics"),
            direction("Definition"),
            content("Energy is conserved."),
            direction("Empty"),
            topic("Chemistry"),
            direction("Definition"),
            content("Atoms bond."),
            direction("Evolution"),
            content("From alchemy to chemistry."),
        ];

        let cards = build_cards(&paragraphs);
        let ids: Vec<&str> = cards.iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, vec!["d00001", "d00002", "d00003"]);
        assert_eq!(cards[1].topic, "Chemistry");
        assert_deck_invariants(&cards);
    }

    #[test]
    fn test_blank_paragraphs_are_invisible() {
        let paragraphs = vec![
            blank(),
            topic("Physics"),
            blank(),
            direction("Definition"),
            blank(),
            content("Energy is conserved."),
            blank(),
        ];
        let cards = build_cards(&paragraphs);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].blocks.len(), 1);
    }

    #[test]
    fn test_whitespace_normalized_in_labels() {
        let paragraphs = vec![
            Paragraph::new(
                "Heading 1",
                vec![Run::plain("  Thermo"), Run::plain("dynamics \n")],
            ),
            Paragraph::with_runs(vec![Run::bold("Future"), Run::bold("\tresearch ")]),
            content("Open   questions\nremain."),
        ];
        let cards = build_cards(&paragraphs);
        assert_eq!(cards[0].topic, "Thermodynamics");
        assert_eq!(cards[0].direction, "Future research");
        assert_eq!(cards[0].blocks[0].text, "Open questions remain.");
    }

    #[test]
    fn test_highlights_attached_to_blocks() {
        let paragraphs = vec![
            topic("Biology"),
            direction("Definition"),
            Paragraph::with_runs(vec![
                Run::bold("Photosynthesis"),
                Run::plain(" converts "),
                Run::plain("light").with_color("00B050"),
                Run::plain(" into "),
                Run::bold("chemical energy."),
            ]),
        ];
        let cards = build_cards(&paragraphs);
        assert_eq!(
            cards[0].blocks[0].highlights,
            vec!["Photosynthesis", "light", "chemical energy"]
        );
        assert_eq!(
            cards[0].blocks[0].text,
            "Photosynthesis converts light into chemical energy."
        );
    }

    #[test]
    fn test_bold_sentence_is_content_not_direction() {
        let para = direction("This is a long fully bold sentence that keeps going on");
        assert_eq!(classify(&para), Role::Content);
        assert_eq!(
            extract_highlights(&para),
            Vec::<String>::new(),
            "run longer than 40 characters is not a highlight"
        );
    }

    #[test]
    fn test_rerun_is_identical_apart_from_timestamp() {
        let paragraphs = vec![
            topic("Physics"),
            direction("Definition"),
            Paragraph::with_runs(vec![Run::bold("Energy"), Run::plain(" is conserved.")]),
            topic("Chemistry"),
            direction("Evolution"),
            content("From alchemy to chemistry."),
        ];
        let rules = Rules::default();
        let first = build_deck_with(&paragraphs, "notes.docx", &rules);
        let second = build_deck_with(&paragraphs, "notes.docx", &rules);

        assert_eq!(first.cards, second.cards);
        assert_eq!(first.meta.topics, second.meta.topics);
        assert_eq!(first.meta.card_count, first.cards.len());
        assert_eq!(
            serde_json::to_string(&first.cards).unwrap(),
            serde_json::to_string(&second.cards).unwrap()
        );
    }

    #[test]
    fn test_topics_listed_once_in_first_occurrence_order() {
        let paragraphs = vec![
            topic("Physics"),
            topic("Chemistry"),
            direction("Definition"),
            content("Atoms bond."),
            topic("Physics"),
            direction("Evolution"),
            content("Newton to Einstein."),
        ];
        let deck = build_deck_with(&paragraphs, "notes.docx", &Rules::default());
        assert_eq!(deck.meta.topics, vec!["Physics", "Chemistry"]);
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[1].topic, "Physics");
    }
}
