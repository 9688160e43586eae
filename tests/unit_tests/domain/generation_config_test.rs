use std::collections::BTreeMap;

use docthread::domain::{
    ConfigurationError, GenerationConfig, GenerationConfigUpdate, PostFailurePolicy,
    THREAD_PROMPT_KEY, TITLE_PROMPT_KEY, TitleSource,
};

#[test]
fn given_defaults_when_validating_then_config_is_valid() {
    let config = GenerationConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.model_name, "gpt-3.5-turbo");
    assert_eq!(config.chunk_size, 2000);
    assert_eq!(config.max_chunks, 10);
    assert_eq!(config.max_posts, 5);
    assert_eq!(config.title_source, TitleSource::FirstThreadChunk);
    assert_eq!(config.post_failure_policy, PostFailurePolicy::Abort);
}

#[test]
fn given_temperature_above_one_when_validating_then_rejects() {
    let config = GenerationConfig {
        temperature: 1.5,
        ..GenerationConfig::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigurationError::TemperatureOutOfRange(1.5))
    );
}

#[test]
fn given_nan_temperature_when_validating_then_rejects() {
    let config = GenerationConfig {
        temperature: f32::NAN,
        ..GenerationConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigurationError::TemperatureOutOfRange(_))
    ));
}

#[test]
fn given_blank_model_name_when_validating_then_rejects() {
    let config = GenerationConfig {
        model_name: "  ".to_string(),
        ..GenerationConfig::default()
    };

    assert_eq!(config.validate(), Err(ConfigurationError::EmptyModelName));
}

#[test]
fn given_overlap_equal_to_chunk_size_when_validating_then_rejects() {
    let config = GenerationConfig {
        chunk_size: 100,
        chunk_overlap: 100,
        ..GenerationConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigurationError::OverlapTooLarge {
            overlap_field: "chunk_overlap",
            ..
        })
    ));
}

#[test]
fn given_zero_sizes_when_validating_then_names_the_field() {
    let zero_max_chunks = GenerationConfig {
        max_chunks: 0,
        ..GenerationConfig::default()
    };
    let zero_thread_chunk = GenerationConfig {
        thread_chunk_size: 0,
        ..GenerationConfig::default()
    };

    assert_eq!(
        zero_max_chunks.validate(),
        Err(ConfigurationError::MustBePositive("max_chunks"))
    );
    assert_eq!(
        zero_thread_chunk.validate(),
        Err(ConfigurationError::MustBePositive("thread_chunk_size"))
    );
}

#[test]
fn given_max_posts_outside_limit_when_validating_then_rejects() {
    for max_posts in [0, 11] {
        let config = GenerationConfig {
            max_posts,
            ..GenerationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MaxPostsOutOfRange(max_posts))
        );
    }
}

#[test]
fn given_oversized_title_slice_when_validating_then_rejects() {
    let config = GenerationConfig {
        title_source: TitleSource::LeadingCharacters { chars: 1001 },
        ..GenerationConfig::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigurationError::TitleSliceOutOfRange(1001))
    );
}

#[test]
fn given_prompt_without_placeholder_when_validating_then_rejects() {
    let mut config = GenerationConfig::default();
    config
        .prompts
        .insert(TITLE_PROMPT_KEY.to_string(), "Write a title".to_string());

    assert_eq!(
        config.validate(),
        Err(ConfigurationError::PlaceholderCount {
            key: TITLE_PROMPT_KEY,
            found: 0
        })
    );
}

#[test]
fn given_missing_prompt_when_validating_then_rejects() {
    let mut config = GenerationConfig::default();
    config.prompts.remove(THREAD_PROMPT_KEY);

    assert_eq!(
        config.validate(),
        Err(ConfigurationError::MissingPrompt(THREAD_PROMPT_KEY))
    );
}

#[test]
fn given_partial_update_when_applying_then_only_set_fields_change() {
    let base = GenerationConfig::default();
    let update = GenerationConfigUpdate {
        temperature: Some(0.2),
        post_failure_policy: Some(PostFailurePolicy::Skip),
        prompts: Some(BTreeMap::from([(
            THREAD_PROMPT_KEY.to_string(),
            "Short post about {content}".to_string(),
        )])),
        ..GenerationConfigUpdate::default()
    };

    let updated = base.apply(update);

    assert_eq!(updated.temperature, 0.2);
    assert_eq!(updated.post_failure_policy, PostFailurePolicy::Skip);
    assert_eq!(updated.thread_prompt().unwrap(), "Short post about {content}");
    assert_eq!(updated.title_prompt().unwrap(), base.title_prompt().unwrap());
    assert_eq!(updated.max_posts, base.max_posts);
}

#[test]
fn given_partial_json_when_deserializing_then_missing_fields_use_defaults() {
    let json = serde_json::json!({
        "max_posts": 3,
        "title_source": { "strategy": "leading_characters", "chars": 200 },
        "post_failure_policy": "skip"
    });

    let config: GenerationConfig = serde_json::from_value(json).unwrap();

    assert_eq!(config.max_posts, 3);
    assert_eq!(config.title_source, TitleSource::LeadingCharacters { chars: 200 });
    assert_eq!(config.post_failure_policy, PostFailurePolicy::Skip);
    assert_eq!(config.chunk_size, 2000);
    assert!(config.validate().is_ok());
}

#[test]
fn given_json_with_one_prompt_when_deserializing_then_prompts_merge_over_defaults() {
    let json = serde_json::json!({
        "prompts": { "thread": "Post about {content}" }
    });

    let config: GenerationConfig = serde_json::from_value(json).unwrap();

    assert_eq!(config.thread_prompt().unwrap(), "Post about {content}");
    assert_eq!(
        config.title_prompt().unwrap(),
        GenerationConfig::default().title_prompt().unwrap()
    );
    assert!(config.validate().is_ok());
}
