use diesel::prelude::*;

use crate::domain::schedule_type::{
    NewScheduleType as DomainNewScheduleType, ScheduleType as DomainScheduleType,
};
use crate::models::schedule_type::{
    NewScheduleType as DbNewScheduleType, ScheduleType as DbScheduleType,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselStore, ScheduleTypeReader, ScheduleTypeWriter};

impl ScheduleTypeReader for DieselStore {
    fn list_schedule_types(&mut self) -> RepositoryResult<Vec<DomainScheduleType>> {
        use crate::schema::schedule_types;

        let db_schedule_types = schedule_types::table
            .order(schedule_types::id.asc())
            .select(DbScheduleType::as_select())
            .load::<DbScheduleType>(self.conn())?;

        Ok(db_schedule_types
            .into_iter()
            .map(DomainScheduleType::from)
            .collect())
    }
}

impl ScheduleTypeWriter for DieselStore {
    fn create_schedule_type(
        &mut self,
        new_schedule_type: &DomainNewScheduleType,
    ) -> RepositoryResult<DomainScheduleType> {
        use crate::schema::schedule_types;

        let insertable = DbNewScheduleType::from(new_schedule_type);

        let created = diesel::insert_into(schedule_types::table)
            .values(&insertable)
            .returning(DbScheduleType::as_returning())
            .get_result::<DbScheduleType>(self.conn())?;

        Ok(created.into())
    }
}
