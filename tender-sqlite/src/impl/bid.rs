use crate::{Db, types::DateTime};
use sqlx::{Sqlite, Transaction, types::Json};
use tender_core::{
    models::{Bid, BidId, MergeOutcome, StampedPatch, TenderId},
    ports::BidRepository,
};

/// Insert a bid as part of an open write transaction.
pub(super) async fn insert_bid(
    tx: &mut Transaction<'_, Sqlite>,
    bid: &Bid<DateTime>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        insert into
            bid (id, tender_id, bidder_id, status, data)
        values
            ($1, $2, $3, $4, jsonb($5))
        "#,
    )
    .bind(bid.id.to_string())
    .bind(bid.tender_id.to_string())
    .bind(bid.bidder_id.to_string())
    .bind(bid.status.as_str())
    .bind(Json(bid))
    .execute(&mut **tx)
    .await?;

    Ok(())
}

impl BidRepository for Db {
    async fn create_bid(&self, bid: Bid<Self::DateTime>) -> Result<(), Self::Error> {
        let mut tx = self.writer.begin().await?;
        insert_bid(&mut tx, &bid).await?;
        tx.commit().await
    }

    async fn get_bid(
        &self,
        tender_id: TenderId,
        bid_id: BidId,
    ) -> Result<Option<Bid<Self::DateTime>>, Self::Error> {
        let bid = sqlx::query_scalar::<_, Json<Bid<DateTime>>>(
            r#"
            select
                json(data)
            from
                bid
            where
                tender_id = $1
            and
                id = $2
            "#,
        )
        .bind(tender_id.to_string())
        .bind(bid_id.to_string())
        .fetch_optional(&self.reader)
        .await?;

        Ok(bid.map(|Json(bid)| bid))
    }

    async fn apply_bid_patch(
        &self,
        tender_id: TenderId,
        bid_id: BidId,
        patch: StampedPatch<Self::DateTime>,
        touch_tender: bool,
        as_of: Self::DateTime,
    ) -> Result<MergeOutcome<Self::DateTime>, Self::Error> {
        // Reading through the writer keeps the read and the write in one transaction.
        let mut tx = self.writer.begin().await?;

        let stored = sqlx::query_scalar::<_, Json<Bid<DateTime>>>(
            r#"
            select
                json(data)
            from
                bid
            where
                tender_id = $1
            and
                id = $2
            "#,
        )
        .bind(tender_id.to_string())
        .bind(bid_id.to_string())
        .fetch_optional(&mut *tx)
        .await?;

        let stored = stored.map(|Json(bid)| bid);
        let updated = match patch.merge_onto(stored.as_ref()) {
            MergeOutcome::Applied(updated) => updated,
            outcome => return Ok(outcome),
        };

        sqlx::query(
            r#"
            update
                bid
            set
                status = $1,
                data = jsonb($2)
            where
                id = $3
            "#,
        )
        .bind(updated.status.as_str())
        .bind(Json(&updated))
        .bind(bid_id.to_string())
        .execute(&mut *tx)
        .await?;

        if touch_tender {
            sqlx::query(
                r#"
                update
                    tender
                set
                    date_modified = $1
                where
                    id = $2
                "#,
            )
            .bind(as_of)
            .bind(tender_id.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(MergeOutcome::Applied(updated))
    }
}
