use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use common::constants::{DEFAULT_ACCURACY, DEFAULT_MAX_RETRIES};
use common::types::{BlockInfo, BlockPosition, DateInput, ResolvedBlock};
use common::utils::{now_timestamp, to_timestamp};
use execution::rpc::ChainRpc;

use crate::errors::{DaterError, TargetError};

/// Upper bound on the slots reserved up front by [`Dater::resolve_range`].
const MAX_PREALLOCATED_SLOTS: usize = 1024;

/// Resolves dates to block numbers over a [`ChainRpc`].
///
/// The genesis timestamp (the timestamp of block 1) is fetched on first use
/// and shared by every later call on the same instance.
pub struct Dater<R: ChainRpc> {
    rpc: R,
    accuracy: f64,
    max_retries: u64,
    genesis: OnceCell<u64>,
}

/// Working state of a single search.
#[derive(Debug, Clone, Copy)]
struct SearchBounds {
    low: u64,
    high: u64,
    /// Estimated seconds per block.
    block_time: f64,
}

impl SearchBounds {
    /// Interpolates the height of `target` from the current rate estimate.
    ///
    /// Estimates inside `[low, high]` are used as they are. Estimates outside
    /// the bracket are pulled one block inside it, or onto its edge once the
    /// bracket is a single step wide.
    fn candidate(&self, target: f64, genesis: f64) -> u64 {
        let estimate = ((target - genesis) / self.block_time).floor();

        if !estimate.is_finite() {
            warn!(block_time = self.block_time, "degenerate block time estimate");
            return self.low;
        }

        if estimate >= self.low as f64 && estimate <= self.high as f64 {
            return estimate as u64;
        }

        let below = estimate < self.low as f64;
        let clamped = match (below, self.high - self.low <= 1) {
            (true, true) => self.low,
            (false, true) => self.high,
            (true, false) => self.low + 1,
            (false, false) => self.high - 1,
        };

        debug!(
            estimate,
            clamped,
            low = self.low,
            high = self.high,
            "estimate outside bracket"
        );
        clamped
    }

    /// Re-anchors the rate at genesis using the block just probed.
    fn refine(&mut self, block: &BlockInfo, genesis: f64) {
        if block.number == 0 {
            return;
        }

        let block_time = (block.timestamp as f64 - genesis) / block.number as f64;
        if block_time.is_finite() && block_time > 0.0 {
            self.block_time = block_time;
        }
    }
}

impl<R: ChainRpc> Dater<R> {
    pub fn new(rpc: &str, accuracy: f64, max_retries: u64) -> eyre::Result<Self> {
        let rpc = R::new(rpc)?;
        Ok(Self::with_rpc(rpc, accuracy, max_retries)?)
    }

    pub fn with_rpc(rpc: R, accuracy: f64, max_retries: u64) -> Result<Self, DaterError> {
        if !(accuracy.is_finite() && accuracy > 0.0) {
            return Err(DaterError::InvalidConfig(format!(
                "accuracy must be a positive number of seconds, got {accuracy}"
            )));
        }

        if max_retries == 0 {
            return Err(DaterError::InvalidConfig(
                "max retries must be greater than 0".to_string(),
            ));
        }

        Ok(Dater {
            rpc,
            accuracy,
            max_retries,
            genesis: OnceCell::new(),
        })
    }

    pub fn with_defaults(rpc: R) -> Self {
        Dater {
            rpc,
            accuracy: DEFAULT_ACCURACY,
            max_retries: DEFAULT_MAX_RETRIES,
            genesis: OnceCell::new(),
        }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn max_retries(&self) -> u64 {
        self.max_retries
    }

    /// Timestamp of block 1, fetched once per instance.
    pub async fn genesis_timestamp(&self) -> Result<u64, DaterError> {
        self.genesis
            .get_or_try_init(|| async {
                let block = self.fetch_block(1).await?;
                debug!(timestamp = block.timestamp, "resolved genesis timestamp");
                Ok::<_, DaterError>(block.timestamp)
            })
            .await
            .copied()
    }

    /// Finds the block matching `date`, nudged to the requested side of it.
    pub async fn locate(
        &self,
        date: impl Into<DateInput>,
        position: BlockPosition,
    ) -> Result<ResolvedBlock, DaterError> {
        let date = date.into();
        let target = self.check_target(&date).await?;

        let current = self
            .rpc
            .get_block_number()
            .await
            .map_err(DaterError::BlockNumberFetch)?;

        let genesis = self.genesis_timestamp().await? as f64;
        let block_time = (now_timestamp() - genesis) / current.max(1) as f64;

        let resolved = self.search(target, position, 0, current, block_time).await?;

        info!(
            date = %date,
            %position,
            block = resolved.height(),
            retries = resolved.retries,
            "resolved block"
        );

        Ok(resolved)
    }

    /// Resolves evenly spaced dates between `start` and `end`, both included.
    ///
    /// Every interior search starts above the block found for the previous
    /// slot, so the returned heights never decrease.
    pub async fn resolve_range(
        &self,
        start: impl Into<DateInput>,
        end: impl Into<DateInput>,
        seconds_per_interval: i64,
        position: BlockPosition,
    ) -> Result<Vec<ResolvedBlock>, DaterError> {
        if seconds_per_interval <= 0 {
            return Err(DaterError::InvalidStep(seconds_per_interval));
        }

        let start = start.into();
        let end = end.into();
        if to_timestamp(&end)? < to_timestamp(&start)? {
            return Err(DaterError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let start_block = self.locate(start, position).await?;
        let end_block = self.locate(end, position).await?;

        let step = seconds_per_interval.unsigned_abs();
        let span = end_block.timestamp().saturating_sub(start_block.timestamp());
        let count = (span / step + 1) as usize;

        let genesis = self.genesis_timestamp().await? as f64;
        let block_time =
            (end_block.timestamp() as f64 - genesis) / end_block.height().max(1) as f64;

        let mut blocks = Vec::with_capacity(count.min(MAX_PREALLOCATED_SLOTS));
        blocks.push(start_block);

        let mut low = start_block.height();
        for i in 1..count.saturating_sub(1) {
            let target = (start_block.timestamp() + i as u64 * step) as f64;
            let block = self
                .search(target, position, low, end_block.height(), block_time)
                .await?;

            low = (block.height() + 1).min(end_block.height());
            blocks.push(block);
        }

        if count > 1 {
            blocks.push(end_block);
        }

        info!(count, interval = step, %position, "resolved block range");
        Ok(blocks)
    }

    /// Parses `date` and checks it lies between genesis and now.
    async fn check_target(&self, date: &DateInput) -> Result<f64, DaterError> {
        let target = to_timestamp(date)?;

        if target > now_timestamp() {
            return Err(TargetError::InFuture(date.to_string()).into());
        }

        if target < self.genesis_timestamp().await? as f64 {
            return Err(TargetError::BeforeGenesis(date.to_string()).into());
        }

        Ok(target)
    }

    async fn search(
        &self,
        target: f64,
        position: BlockPosition,
        low: u64,
        high: u64,
        block_time: f64,
    ) -> Result<ResolvedBlock, DaterError> {
        let genesis = self.genesis_timestamp().await? as f64;
        let mut bounds = SearchBounds {
            low,
            high,
            block_time,
        };
        let mut retries = 0;

        loop {
            if retries > self.max_retries {
                return Err(DaterError::SearchExhausted { target });
            }

            let pos = bounds.candidate(target, genesis);
            let block = self.fetch_block(pos).await?;
            let timestamp = block.timestamp as f64;

            debug!(
                round = retries,
                block = pos,
                timestamp = block.timestamp,
                block_time = bounds.block_time,
                "probed block"
            );

            let converged = (target - timestamp).abs() <= self.accuracy;
            if converged || pos == bounds.low || pos == bounds.high {
                return self.adjust(block, target, position, retries, high).await;
            }

            bounds.refine(&block, genesis);
            if target < timestamp {
                bounds.high = pos;
            } else {
                bounds.low = pos;
            }

            retries += 1;
        }
    }

    /// Steps at most one block towards the requested side of `target`.
    async fn adjust(
        &self,
        mut block: BlockInfo,
        target: f64,
        position: BlockPosition,
        mut retries: u64,
        upper: u64,
    ) -> Result<ResolvedBlock, DaterError> {
        let timestamp = block.timestamp as f64;
        if position == BlockPosition::Before && timestamp > target && block.number > 0 {
            block = self.fetch_block(block.number - 1).await?;
            retries += 1;
        }

        let timestamp = block.timestamp as f64;
        if position == BlockPosition::After && timestamp < target && block.number < upper {
            block = self.fetch_block(block.number + 1).await?;
            retries += 1;
        }

        Ok(ResolvedBlock {
            block,
            retries,
            seconds_from_target: (target - block.timestamp as f64).ceil() as i64,
        })
    }

    async fn fetch_block(&self, number: u64) -> Result<BlockInfo, DaterError> {
        self.rpc
            .get_block(number)
            .await
            .map_err(|err| DaterError::BlockFetch { number, err })
    }
}
