//! 游戏组合服务
//!
//! 从三张分类表各取一个值组合成游戏，或根据链接还原指定组合。

use std::sync::Arc;

use indiegame_shared::observability::metrics;
use tracing::{debug, instrument};

use crate::error::{GameError, Result};
use crate::link::{self, LinkIds};
use crate::models::{Category, Game};
use crate::repository::LookupStore;

/// 游戏组合服务
pub struct GameComposer<S: LookupStore> {
    store: Arc<S>,
}

impl<S: LookupStore> Clone for GameComposer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LookupStore> GameComposer<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 随机组合一个游戏
    ///
    /// 依次从 genre、emotion、fantasy 抽取，任一抽取失败即返回错误。
    #[instrument(skip(self))]
    pub async fn random_game(&self) -> Result<Game> {
        let result = self.draw().await;
        metrics::record_game_composed("random", status_label(&result));
        result
    }

    /// 根据链接还原游戏
    ///
    /// 返回的 `link` 字段保留调用方传入的原始字符串，不重新编码。
    #[instrument(skip(self))]
    pub async fn game_from_link(&self, link: &str) -> Result<Game> {
        let result = self.resolve(link).await;
        metrics::record_game_composed("link", status_label(&result));
        result
    }

    async fn draw(&self) -> Result<Game> {
        let genre = self.store.random_value(Category::Genre).await?;
        let emotion = self.store.random_value(Category::Emotion).await?;
        let fantasy = self.store.random_value(Category::Fantasy).await?;

        let ids = LinkIds::new(
            link_id(Category::Genre, genre.id)?,
            link_id(Category::Emotion, emotion.id)?,
            link_id(Category::Fantasy, fantasy.id)?,
        );
        let link = ids.encode();

        debug!(link = %link, "Random game composed");

        Ok(Game {
            genre: genre.value,
            emotion: emotion.value,
            fantasy: fantasy.value,
            link,
        })
    }

    async fn resolve(&self, link: &str) -> Result<Game> {
        let ids = link::decode(link)?;

        let genre = self
            .store
            .value_by_id(Category::Genre, ids.genre.into())
            .await?;
        let emotion = self
            .store
            .value_by_id(Category::Emotion, ids.emotion.into())
            .await?;
        let fantasy = self
            .store
            .value_by_id(Category::Fantasy, ids.fantasy.into())
            .await?;

        Ok(Game {
            genre,
            emotion,
            fantasy,
            link: link.to_string(),
        })
    }
}

/// 行 id 超出单字节范围时无法编码进链接
fn link_id(category: Category, id: i64) -> Result<u8> {
    u8::try_from(id).map_err(|_| GameError::IdOutOfRange { category, id })
}

fn status_label<T>(result: &Result<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => e.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryValue;
    use crate::repository::MockLookupStore;
    use mockall::predicate::eq;

    fn row(id: i64, value: &str) -> CategoryValue {
        CategoryValue {
            id,
            value: value.to_string(),
        }
    }

    fn composer(store: MockLookupStore) -> GameComposer<MockLookupStore> {
        GameComposer::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_random_game_builds_link_from_ids() {
        let mut store = MockLookupStore::new();
        store
            .expect_random_value()
            .with(eq(Category::Genre))
            .returning(|_| Ok(row(1, "roguelike")));
        store
            .expect_random_value()
            .with(eq(Category::Emotion))
            .returning(|_| Ok(row(26, "grief")));
        store
            .expect_random_value()
            .with(eq(Category::Fantasy))
            .returning(|_| Ok(row(255, "the moon")));

        let game = composer(store).random_game().await.unwrap();
        assert_eq!(
            game,
            Game {
                genre: "roguelike".to_string(),
                emotion: "grief".to_string(),
                fantasy: "the moon".to_string(),
                link: "011aff".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_random_game_propagates_empty_table() {
        let mut store = MockLookupStore::new();
        store
            .expect_random_value()
            .with(eq(Category::Genre))
            .returning(|_| Ok(row(1, "roguelike")));
        store
            .expect_random_value()
            .with(eq(Category::Emotion))
            .returning(|c| Err(GameError::EmptyTable(c)));
        store
            .expect_random_value()
            .with(eq(Category::Fantasy))
            .never();

        let err = composer(store).random_game().await.unwrap_err();
        assert!(matches!(err, GameError::EmptyTable(Category::Emotion)));
    }

    #[tokio::test]
    async fn test_random_game_rejects_unlinkable_id() {
        let mut store = MockLookupStore::new();
        store
            .expect_random_value()
            .returning(|c| match c {
                Category::Fantasy => Ok(row(256, "too far")),
                _ => Ok(row(1, "fine")),
            });

        let err = composer(store).random_game().await.unwrap_err();
        assert!(matches!(
            err,
            GameError::IdOutOfRange {
                category: Category::Fantasy,
                id: 256
            }
        ));
    }

    #[tokio::test]
    async fn test_game_from_link_keeps_original_link() {
        let mut store = MockLookupStore::new();
        store
            .expect_value_by_id()
            .with(eq(Category::Genre), eq(10))
            .returning(|_, _| Ok("metroidvania".to_string()));
        store
            .expect_value_by_id()
            .with(eq(Category::Emotion), eq(11))
            .returning(|_, _| Ok("jealousy".to_string()));
        store
            .expect_value_by_id()
            .with(eq(Category::Fantasy), eq(12))
            .returning(|_, _| Ok("a bakery".to_string()));

        let game = composer(store).game_from_link("0A0b0C").await.unwrap();
        assert_eq!(game.genre, "metroidvania");
        assert_eq!(game.emotion, "jealousy");
        assert_eq!(game.fantasy, "a bakery");
        assert_eq!(game.link, "0A0b0C");
    }

    #[tokio::test]
    async fn test_game_from_invalid_link_skips_store() {
        let mut store = MockLookupStore::new();
        store.expect_value_by_id().never();

        let composer = composer(store);
        for link in ["12", "zzzzzz", "1234567"] {
            let err = composer.game_from_link(link).await.unwrap_err();
            assert!(matches!(err, GameError::InvalidLink(_)));
        }
    }

    #[tokio::test]
    async fn test_game_from_link_unknown_id() {
        let mut store = MockLookupStore::new();
        store
            .expect_value_by_id()
            .returning(|category, id| Err(GameError::NotFound { category, id }));

        let err = composer(store).game_from_link("000000").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
