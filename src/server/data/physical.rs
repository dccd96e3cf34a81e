//! Physical measurement repository.

use chrono::Utc;
use entity::physical_measurement::PhysicalCategory;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::physical::CreatePhysicalDto;

pub struct PhysicalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhysicalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One member's measurement history in date order, optionally restricted
    /// to a single category.
    pub async fn by_member(
        &self,
        member_id: i32,
        category: Option<PhysicalCategory>,
    ) -> Result<Vec<entity::physical_measurement::Model>, DbErr> {
        let mut query = entity::prelude::PhysicalMeasurement::find()
            .filter(entity::physical_measurement::Column::MemberId.eq(member_id))
            .order_by_asc(entity::physical_measurement::Column::MeasureDate);

        if let Some(category) = category {
            query = query.filter(entity::physical_measurement::Column::Category.eq(category));
        }

        query.all(self.db).await
    }

    /// Team-wide history of one category, by date then member name.
    pub async fn list_for_category(
        &self,
        category: PhysicalCategory,
    ) -> Result<Vec<(entity::physical_measurement::Model, Option<entity::member::Model>)>, DbErr>
    {
        entity::prelude::PhysicalMeasurement::find()
            .find_also_related(entity::prelude::Member)
            .filter(entity::physical_measurement::Column::Category.eq(category))
            .order_by_asc(entity::physical_measurement::Column::MeasureDate)
            .order_by_asc(entity::member::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        dto: &CreatePhysicalDto,
    ) -> Result<entity::physical_measurement::Model, DbErr> {
        entity::physical_measurement::ActiveModel {
            member_id: ActiveValue::Set(dto.member_id),
            measure_date: ActiveValue::Set(dto.measure_date),
            category: ActiveValue::Set(dto.category),
            value: ActiveValue::Set(dto.value),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
