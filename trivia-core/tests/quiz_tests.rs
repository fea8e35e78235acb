use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_core::{ApiError, next_question};
use trivia_store::TriviaStore;
use trivia_types::{CategoryId, NewQuestion, QuestionId, QuizCategory, QuizRequest};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn seeded() -> (TriviaStore, CategoryId, CategoryId) {
    let store = TriviaStore::open_in_memory().unwrap();
    let science = store.insert_category("Science").unwrap();
    let art = store.insert_category("Art").unwrap();
    for n in 1..=4 {
        store
            .insert_question(&NewQuestion {
                text: format!("Science question {n}"),
                answer: "answer".into(),
                category: science,
                difficulty: 1,
            })
            .unwrap();
    }
    store
        .insert_question(&NewQuestion {
            text: "Who painted the Mona Lisa?".into(),
            answer: "Leonardo da Vinci".into(),
            category: art,
            difficulty: 2,
        })
        .unwrap();
    (store, science, art)
}

fn request(category_id: i64, previous: &[i64]) -> QuizRequest {
    QuizRequest {
        quiz_category: Some(QuizCategory {
            id: category_id,
            label: None,
        }),
        previous_questions: Some(previous.iter().copied().map(QuestionId::from_raw).collect()),
    }
}

// ── Selection contract ────────────────────────────────────────────

#[test]
fn first_question_of_a_session() {
    let (store, _, _) = seeded();
    let response = next_question(&store, &request(0, &[]), &mut rng()).unwrap();
    assert!(response.question.is_some());
}

#[test]
fn never_returns_a_seen_question() {
    let (store, _, _) = seeded();
    // Walk a full session: every draw goes into `seen` until exhaustion.
    let mut rng = rng();
    let mut seen: Vec<i64> = Vec::new();
    loop {
        let response = next_question(&store, &request(0, &seen), &mut rng).unwrap();
        match response.question {
            Some(question) => {
                assert!(!seen.contains(&question.id.as_i64()));
                seen.push(question.id.as_i64());
            }
            None => break,
        }
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn category_filter_is_respected() {
    let (store, science, _) = seeded();
    let mut rng = rng();
    for _ in 0..20 {
        let response =
            next_question(&store, &request(science.as_i64(), &[]), &mut rng).unwrap();
        assert_eq!(response.question.unwrap().category, science);
    }
}

#[test]
fn exhausted_category_returns_null() {
    let (store, _, art) = seeded();
    let in_art: Vec<i64> = store
        .questions_in_category(art)
        .unwrap()
        .iter()
        .map(|q| q.id.as_i64())
        .collect();
    let response = next_question(&store, &request(art.as_i64(), &in_art), &mut rng()).unwrap();
    assert!(response.question.is_none());
}

#[test]
fn all_seen_returns_null() {
    let (store, _, _) = seeded();
    let everything: Vec<i64> = store
        .all_questions()
        .unwrap()
        .iter()
        .map(|q| q.id.as_i64())
        .collect();
    let response = next_question(&store, &request(0, &everything), &mut rng()).unwrap();
    assert!(response.question.is_none());
}

#[test]
fn unknown_category_is_exhausted_not_error() {
    let (store, _, _) = seeded();
    let response = next_question(&store, &request(99, &[]), &mut rng()).unwrap();
    assert!(response.question.is_none());
}

#[test]
fn absent_previous_questions_means_empty() {
    let (store, science, _) = seeded();
    let request = QuizRequest {
        quiz_category: Some(QuizCategory {
            id: science.as_i64(),
            label: Some("Science".into()),
        }),
        previous_questions: None,
    };
    let response = next_question(&store, &request, &mut rng()).unwrap();
    assert!(response.question.is_some());
}

#[test]
fn every_eligible_question_is_reachable() {
    // Uniform selection over two candidates must eventually produce both.
    let (store, _, _) = seeded();
    let mut rng = rng();
    let all: Vec<i64> = store
        .all_questions()
        .unwrap()
        .iter()
        .map(|q| q.id.as_i64())
        .collect();
    let seen: Vec<i64> = all[..3].to_vec();
    let mut drawn = std::collections::HashSet::new();
    for _ in 0..100 {
        let response = next_question(&store, &request(0, &seen), &mut rng).unwrap();
        drawn.insert(response.question.unwrap().id.as_i64());
    }
    assert_eq!(drawn.len(), 2);
}

// ── Input validation ──────────────────────────────────────────────

#[test]
fn missing_category_selector_is_bad_input() {
    let (store, _, _) = seeded();
    let request = QuizRequest {
        quiz_category: None,
        previous_questions: Some(vec![]),
    };
    let err = next_question(&store, &request, &mut rng()).unwrap_err();
    assert_eq!(err, ApiError::BadInput);
}

// ── Wire shape ────────────────────────────────────────────────────

#[test]
fn exhausted_serializes_question_null() {
    let (store, _, _) = seeded();
    let everything: Vec<i64> = store
        .all_questions()
        .unwrap()
        .iter()
        .map(|q| q.id.as_i64())
        .collect();
    let response = next_question(&store, &request(0, &everything), &mut rng()).unwrap();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert!(value["question"].is_null());
}
