//! Property-based tests using proptest

use film_search::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Text drawn from a small vocabulary so that overlaps are common
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "The", "great", "ESCAPE", "space", "odyssey", "a", "of", "drama", "Epic", "cat",
        ]),
        0..12,
    )
    .prop_flat_map(|words| {
        let n = words.len();
        (
            Just(words),
            prop::collection::vec(prop::sample::select(vec![" ", "  ", "\t", "\n"]), n),
        )
    })
    .prop_map(|(words, seps)| {
        words
            .iter()
            .zip(seps.iter())
            .map(|(w, s)| format!("{s}{w}"))
            .collect::<String>()
    })
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document<usize>>> {
    prop::collection::vec(text_strategy(), 0..20).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Document::new(i, t))
            .collect()
    })
}

fn stopword_strategy() -> impl Strategy<Value = StopwordFilter> {
    prop::collection::vec(prop::sample::select(vec!["the", "a", "of", "cat"]), 0..4)
        .prop_map(|words| StopwordFilter::from_list(&words))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_tokens_are_nonempty_and_lowercase(text in "[a-zA-ZÀ-ÖØ-öø-ÿА-яЁё0-9 \\t\\n.,!]{0,60}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn test_filter_removes_stopwords_and_keeps_order(
        text in text_strategy(),
        stop in stopword_strategy()
    ) {
        let tokens = tokenize(&text);
        let kept = filter_stop_words(tokens.clone(), &stop);

        prop_assert!(kept.iter().all(|t| !stop.is_stopword(t)));

        // `kept` is a subsequence of `tokens`.
        let mut remaining = tokens.iter();
        for token in &kept {
            prop_assert!(remaining.any(|t| t == token));
        }
    }

    #[test]
    fn test_relevance_counts_distinct_terms(
        corpus in corpus_strategy(),
        query in text_strategy(),
        stop in stopword_strategy()
    ) {
        let query_terms: HashSet<String> =
            filter_stop_words(tokenize(&query), &stop).into_iter().collect();

        for scored in rank(&corpus, &query, &stop) {
            let doc_terms: HashSet<String> =
                tokenize(&corpus[scored.id].text).into_iter().collect();
            let expected = doc_terms.intersection(&query_terms).count();
            prop_assert_eq!(scored.relevance, expected);
            prop_assert!(scored.relevance <= query_terms.len());
        }
    }

    #[test]
    fn test_output_sorted_and_stable(
        corpus in corpus_strategy(),
        query in text_strategy()
    ) {
        let ranked = rank(&corpus, &query, &StopwordFilter::empty());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
            if pair[0].relevance == pair[1].relevance {
                // Ids are corpus positions, so equal scores keep corpus order.
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn test_every_nonzero_document_is_returned(
        corpus in corpus_strategy(),
        query in text_strategy()
    ) {
        let ranker = RelevanceRanker::new();
        let terms = ranker.query_terms(&query, &StopwordFilter::empty());
        let ranked = ranker.rank(&corpus, &query, &StopwordFilter::empty());

        let returned: HashSet<usize> = ranked.iter().map(|r| r.id).collect();
        for doc in &corpus {
            let score = ranker.score(&doc.text, &terms);
            prop_assert_eq!(returned.contains(&doc.id), score > 0);
        }
    }

    #[test]
    fn test_empty_query_and_empty_corpus(corpus in corpus_strategy(), query in text_strategy()) {
        prop_assert!(rank(&corpus, "", &StopwordFilter::empty()).is_empty());
        let none: Vec<Document<usize>> = Vec::new();
        prop_assert!(rank(&none, &query, &StopwordFilter::empty()).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential(
        corpus in corpus_strategy(),
        query in text_strategy()
    ) {
        let sequential = RelevanceRanker::with_config(
            RankConfig::default().with_parallel_threshold(None),
        );
        let parallel = RelevanceRanker::with_config(
            RankConfig::default().with_parallel_threshold(Some(1)),
        );
        prop_assert_eq!(
            sequential.rank(&corpus, &query, &StopwordFilter::empty()),
            parallel.rank(&corpus, &query, &StopwordFilter::empty())
        );
    }

    #[test]
    fn test_match_all_is_subset_of_any(
        corpus in corpus_strategy(),
        query in text_strategy()
    ) {
        let any = RelevanceRanker::new().rank(&corpus, &query, &StopwordFilter::empty());
        let all = RelevanceRanker::with_config(
            RankConfig::default().with_match_mode(MatchMode::All),
        )
        .rank(&corpus, &query, &StopwordFilter::empty());

        let any_ids: HashSet<usize> = any.iter().map(|r| r.id).collect();
        prop_assert!(all.iter().all(|r| any_ids.contains(&r.id)));
    }

    #[test]
    fn test_top_n_respects_limit(
        corpus in corpus_strategy(),
        query in text_strategy(),
        top_n in 1usize..5
    ) {
        let full = RelevanceRanker::new().rank(&corpus, &query, &StopwordFilter::empty());
        let limited = RelevanceRanker::with_config(RankConfig::default().with_top_n(top_n))
            .rank(&corpus, &query, &StopwordFilter::empty());

        prop_assert!(limited.len() <= top_n);
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    #[test]
    fn test_popular_counts_sum_to_total(
        texts in prop::collection::vec("[a-c]{1,2}", 0..30)
    ) {
        let mut log = QueryLog::new();
        for text in &texts {
            log.record(text.as_str(), QueryKind::Keyword);
        }
        let popular = log.popular(0);
        let sum: usize = popular.iter().map(|q| q.count).sum();
        prop_assert_eq!(sum, texts.len());
        prop_assert_eq!(popular.len(), log.statistics().unique);
        for pair in popular.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }
}
