use docthread::application::ports::{ConfigRepository, RepositoryError};
use docthread::domain::{
    ConfigurationError, GenerationConfig, GenerationConfigUpdate, TitleSource, UserId,
};
use docthread::infrastructure::persistence::InMemoryConfigRepository;

#[tokio::test]
async fn given_new_user_when_reading_config_then_returns_defaults() {
    let defaults = GenerationConfig {
        max_posts: 3,
        ..GenerationConfig::default()
    };
    let repository = InMemoryConfigRepository::new(defaults.clone());

    let config = repository
        .get_config(Some(&UserId::new("new-user")))
        .await
        .unwrap();

    assert_eq!(config, defaults);
}

#[tokio::test]
async fn given_update_when_reading_back_then_only_that_user_changes() {
    let repository = InMemoryConfigRepository::new(GenerationConfig::default());
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    repository
        .update_config(
            &alice,
            GenerationConfigUpdate {
                model_name: Some("gpt-4o-mini".to_string()),
                title_source: Some(TitleSource::LeadingCharacters { chars: 300 }),
                ..GenerationConfigUpdate::default()
            },
        )
        .await
        .unwrap();

    let alice_config = repository.get_config(Some(&alice)).await.unwrap();
    let bob_config = repository.get_config(Some(&bob)).await.unwrap();
    let anonymous = repository.get_config(None).await.unwrap();

    assert_eq!(alice_config.model_name, "gpt-4o-mini");
    assert_eq!(
        alice_config.title_source,
        TitleSource::LeadingCharacters { chars: 300 }
    );
    assert_eq!(bob_config, GenerationConfig::default());
    assert_eq!(anonymous, GenerationConfig::default());
}

#[tokio::test]
async fn given_invalid_update_when_applying_then_rejects_and_keeps_previous_config() {
    let repository = InMemoryConfigRepository::new(GenerationConfig::default());
    let user = UserId::new("carol");

    let result = repository
        .update_config(
            &user,
            GenerationConfigUpdate {
                temperature: Some(2.0),
                ..GenerationConfigUpdate::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::InvalidConfiguration(
            ConfigurationError::TemperatureOutOfRange(_)
        ))
    ));
    let config = repository.get_config(Some(&user)).await.unwrap();
    assert_eq!(config.temperature, GenerationConfig::default().temperature);
}
