//! SQLite subscription store against an on-disk database.

mod support;

use std::sync::Arc;

use coincourier::domain::{ChatId, CoinName, Subscriber, DEFAULT_COINS};
use coincourier::port::SubscriptionStore;
use support::temp_db::TempDb;

fn coin(raw: &str) -> CoinName {
    CoinName::parse(raw).unwrap()
}

fn subscriber(chat_id: i64, username: &str) -> Subscriber {
    Subscriber::new(ChatId(chat_id), Some(username))
}

#[tokio::test]
async fn database_file_is_created_and_seeded() {
    let db = TempDb::create();
    assert!(db.path().exists());

    let known: Vec<String> = db
        .store()
        .known_coins()
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(known, DEFAULT_COINS);
}

#[tokio::test]
async fn add_then_duplicate_then_remove() {
    let db = TempDb::create();
    let store = db.store();
    let alice = subscriber(100, "alice");

    assert!(store.add_coin(&alice, &coin("usdt")).await.unwrap());
    assert!(!store.add_coin(&alice, &coin("USDT")).await.unwrap());
    assert_eq!(store.list_coins(ChatId(100)).await.unwrap(), vec![coin("USDT")]);

    assert!(store.remove_coin(ChatId(100), &coin("USDT")).await.unwrap());
    assert!(!store.remove_coin(ChatId(100), &coin("USDT")).await.unwrap());
    assert!(store.list_coins(ChatId(100)).await.unwrap().is_empty());
}

#[tokio::test]
async fn initialize_defaults_twice_adds_nothing_new() {
    let db = TempDb::create();
    let store = db.store();
    let alice = subscriber(100, "alice");

    assert_eq!(store.initialize_defaults(&alice).await.unwrap(), 4);
    assert_eq!(store.initialize_defaults(&alice).await.unwrap(), 0);
    assert_eq!(store.list_coins(ChatId(100)).await.unwrap().len(), 4);
}

#[tokio::test]
async fn subscriptions_survive_reopen() {
    let db = TempDb::create();
    {
        let store = db.store();
        store.add_coin(&subscriber(1, "a"), &coin("DOGE")).await.unwrap();
        store.add_coin(&subscriber(1, "a"), &coin("BTC")).await.unwrap();
    }

    let reopened = db.reopen();
    assert_eq!(
        reopened.list_coins(ChatId(1)).await.unwrap(),
        vec![coin("DOGE"), coin("BTC")]
    );
    assert_eq!(reopened.known_coins().unwrap().len(), DEFAULT_COINS.len() + 1);
}

#[tokio::test]
async fn list_all_chats_drops_chats_without_coins() {
    let db = TempDb::create();
    let store = db.store();
    store.add_coin(&subscriber(1, "a"), &coin("BTC")).await.unwrap();
    store.add_coin(&subscriber(2, "b"), &coin("ETH")).await.unwrap();

    store.remove_coin(ChatId(1), &coin("BTC")).await.unwrap();

    let chats = store.list_all_chats().await.unwrap();
    assert_eq!(chats, vec![subscriber(2, "b")]);
}

#[tokio::test]
async fn list_all_chats_keeps_chat_until_last_coin_is_removed() {
    let db = TempDb::create();
    let store = db.store();
    store.add_coin(&subscriber(1, "a"), &coin("BTC")).await.unwrap();
    store.add_coin(&subscriber(2, "b"), &coin("ETH")).await.unwrap();
    store.add_coin(&subscriber(2, "b"), &coin("SOL")).await.unwrap();

    store.remove_coin(ChatId(2), &coin("ETH")).await.unwrap();
    let chats = store.list_all_chats().await.unwrap();
    assert_eq!(chats, vec![subscriber(1, "a"), subscriber(2, "b")]);
    assert_eq!(store.list_coins(ChatId(2)).await.unwrap(), vec![coin("SOL")]);

    store.remove_coin(ChatId(2), &coin("SOL")).await.unwrap();
    let chats = store.list_all_chats().await.unwrap();
    assert_eq!(chats, vec![subscriber(1, "a")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_create_exactly_one_subscription() {
    let db = TempDb::create();
    let store: Arc<dyn SubscriptionStore> = db.store();
    let alice = subscriber(7, "alice");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let alice = alice.clone();
        handles.push(tokio::spawn(async move {
            store.add_coin(&alice, &coin("PEPE")).await.unwrap()
        }));
    }

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(store.list_coins(ChatId(7)).await.unwrap(), vec![coin("PEPE")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_new_coin_registration_is_safe() {
    let db = TempDb::create();
    let store: Arc<dyn SubscriptionStore> = db.store();

    let mut handles = Vec::new();
    for chat in 0..6 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let who = Subscriber::new(ChatId(chat), Some("racer"));
            store.add_coin(&who, &coin("NEWCOIN")).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let known = db.store().known_coins().unwrap();
    let newcoin_rows = known.iter().filter(|c| c.as_str() == "NEWCOIN").count();
    assert_eq!(newcoin_rows, 1);
    assert_eq!(store.list_all_chats().await.unwrap().len(), 6);
}
