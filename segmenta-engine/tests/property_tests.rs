//! Property tests for segmenter output

use proptest::prelude::*;
use segmenta_engine::{SegmentationMode, Segmenter, SegmenterConfig, Segments};

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z]{1,8}( [a-zA-Z]{1,8}){0,6}[.!?]?", 0..12).prop_flat_map(
        |pieces| {
            let breaks = prop::collection::vec(
                prop::sample::select(vec![" ", "\n", "\n\n", "\n\n\n"]),
                pieces.len(),
            );
            (Just(pieces), breaks).prop_map(|(pieces, breaks)| {
                pieces
                    .iter()
                    .zip(breaks)
                    .map(|(piece, brk)| format!("{piece}{brk}"))
                    .collect()
            })
        },
    )
}

fn chunks(segments: Segments) -> Vec<String> {
    segments.into_texts()
}

proptest! {
    #[test]
    fn batch_matches_single_calls(texts in prop::collection::vec(document(), 0..8)) {
        let segmenter = Segmenter::for_mode(SegmentationMode::Sentences).unwrap();
        let batch = segmenter.segment_batch(&texts).unwrap();
        prop_assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(batch) {
            prop_assert_eq!(result, segmenter.segment(text).unwrap());
        }
    }

    #[test]
    fn rule_chunks_are_trimmed_and_non_empty(text in document()) {
        for mode in SegmentationMode::RULES {
            let segmenter = Segmenter::for_mode(mode).unwrap();
            for chunk in chunks(segmenter.segment(&text).unwrap()) {
                prop_assert!(!chunk.is_empty());
                prop_assert_eq!(chunk.trim(), chunk.as_str());
            }
        }
    }

    #[test]
    fn lines_never_contain_breaks(text in document()) {
        let segmenter = Segmenter::for_mode(SegmentationMode::Lines).unwrap();
        for chunk in chunks(segmenter.segment(&text).unwrap()) {
            prop_assert!(!chunk.contains('\n'));
        }
    }

    #[test]
    fn recursive_chunks_respect_size(text in document(), size in 4usize..40) {
        let config = SegmenterConfig::builder()
            .chunker("recursive")
            .option("chunk_size", size)
            .build()
            .unwrap();
        let segmenter = Segmenter::new(config).unwrap();
        for chunk in chunks(segmenter.segment(&text).unwrap()) {
            prop_assert!(chunk.chars().count() <= size, "{chunk:?} exceeds {size}");
        }
    }
}
