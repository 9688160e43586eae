use docthread::application::ports::ThreadRepository;
use docthread::domain::{Post, Thread, ThreadId, UserId};
use docthread::infrastructure::persistence::InMemoryThreadRepository;

fn thread(title: &str) -> Thread {
    Thread::new(title, vec![Post::new("post")])
}

#[tokio::test]
async fn given_saved_thread_when_fetching_by_id_then_returns_it() {
    let repository = InMemoryThreadRepository::new();

    let stored = repository.save(None, thread("Title")).await.unwrap();
    let fetched = repository.get(stored.id).await.unwrap();

    assert_eq!(fetched, Some(stored));
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let repository = InMemoryThreadRepository::new();

    let fetched = repository.get(ThreadId::new()).await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn given_threads_of_several_users_when_listing_then_returns_only_owned_newest_first() {
    let repository = InMemoryThreadRepository::new();
    let alice = UserId::new("alice");

    let first = repository
        .save(Some(alice.clone()), thread("first"))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = repository
        .save(Some(alice.clone()), thread("second"))
        .await
        .unwrap();
    repository
        .save(Some(UserId::new("bob")), thread("other"))
        .await
        .unwrap();
    repository.save(None, thread("anonymous")).await.unwrap();

    let listed = repository.list_for_user(&alice).await.unwrap();

    let ids: Vec<ThreadId> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn given_non_owner_when_deleting_then_thread_is_kept() {
    let repository = InMemoryThreadRepository::new();
    let owner = UserId::new("owner");
    let stored = repository
        .save(Some(owner.clone()), thread("mine"))
        .await
        .unwrap();

    let deleted_by_other = repository
        .delete(stored.id, &UserId::new("other"))
        .await
        .unwrap();
    let deleted_by_owner = repository.delete(stored.id, &owner).await.unwrap();

    assert!(!deleted_by_other);
    assert!(deleted_by_owner);
    assert!(repository.get(stored.id).await.unwrap().is_none());
}
