use crate::{
    Db,
    types::{DateTime, TenderRow},
};
use sqlx::types::Json;
use tender_core::{
    models::{Bid, Tender, TenderId, TenderStatus},
    ports::TenderRepository,
};

impl TenderRepository for Db {
    async fn create_tender(&self, tender: Tender<Self::DateTime>) -> Result<(), Self::Error> {
        let mut tx = self.writer.begin().await?;

        sqlx::query(
            r#"
            insert into
                tender (id, status, tender_period_start, tender_period_end, date_modified)
            values
                ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(tender.id.to_string())
        .bind(tender.status.as_str())
        .bind(tender.tender_period.start_date)
        .bind(tender.tender_period.end_date)
        .bind(tender.date_modified)
        .execute(&mut *tx)
        .await?;

        for bid in &tender.bids {
            super::bid::insert_bid(&mut tx, bid).await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Option<Tender<Self::DateTime>>, Self::Error> {
        let row = sqlx::query_as::<_, TenderRow>(
            r#"
            select
                id,
                status,
                tender_period_start,
                tender_period_end,
                date_modified
            from
                tender
            where
                id = $1
            "#,
        )
        .bind(tender_id.to_string())
        .fetch_optional(&self.reader)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut tender = Tender::try_from(row)?;

        // TODO: a single query joining bids onto the tender row would avoid the second round-trip.
        tender.bids = sqlx::query_scalar::<_, Json<Bid<DateTime>>>(
            r#"
            select
                json(data)
            from
                bid
            where
                tender_id = $1
            order by
                seq
            "#,
        )
        .bind(tender_id.to_string())
        .fetch_all(&self.reader)
        .await?
        .into_iter()
        .map(|Json(bid)| bid)
        .collect();

        Ok(Some(tender))
    }

    async fn set_tender_status(
        &self,
        tender_id: TenderId,
        status: TenderStatus,
        as_of: Self::DateTime,
    ) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            update
                tender
            set
                status = $1,
                date_modified = $2
            where
                id = $3
            "#,
        )
        .bind(status.as_str())
        .bind(as_of)
        .bind(tender_id.to_string())
        .execute(&self.writer)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
