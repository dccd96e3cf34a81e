use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (tables with foreign keys after the
/// tables they reference), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Member)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity table, generated from the SeaORM entity definition
    /// using SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the core roster tables: User, Member, Schedule, PracticeMenu,
    /// PlayerRecord and Absence.
    pub fn with_roster_tables(self) -> Self {
        self.with_table(User)
            .with_table(Member)
            .with_table(Schedule)
            .with_table(PracticeMenu)
            .with_table(PlayerRecord)
            .with_table(Absence)
    }

    /// Adds every statistics table on top of User and Member.
    ///
    /// Use this for comparison and leaderboard tests that touch several stat
    /// tables at once.
    pub fn with_stats_tables(self) -> Self {
        self.with_table(User)
            .with_table(Member)
            .with_table(BattingStat)
            .with_table(PitchingStat)
            .with_table(PitchVelocity)
            .with_table(ExitVelocity)
            .with_table(PulldownVelocity)
            .with_table(PhysicalMeasurement)
            .with_table(GameResult)
            .with_table(TeamStat)
    }

    /// Builds the context: connects the in-memory database and creates the
    /// configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
