use chrono::{Duration as ChronoDuration, Local};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{error, info};

use super::{next_run_after, run_carry_over};

impl super::CarryOverScheduler {
    pub(super) fn spawn_daily_task(&self) -> JoinHandle<()> {
        let processor = self.processor.clone();
        let target_hour = self.hour.min(23);
        let target_minute = self.minute.min(59);

        if self.hour > 23 || self.minute > 59 {
            error!(
                "⚠️  Invalid carry-over time {}:{} (clamped to {}:{:02})",
                self.hour, self.minute, target_hour, target_minute
            );
        }

        info!(
            "➕ Scheduling daily carry-over at {}:{:02}",
            target_hour, target_minute
        );

        tokio::spawn(async move {
            loop {
                let now = Local::now();
                let Some(next_run) = next_run_after(&now, target_hour, target_minute) else {
                    // No such wall-clock time (DST gap); retry in an hour
                    error!(
                        "❌ Failed to calculate next carry-over time for {}:{:02}, retrying in 1h",
                        target_hour, target_minute
                    );
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    continue;
                };

                let duration_until_next =
                    (next_run - now).to_std().unwrap_or(Duration::from_secs(60));

                info!(
                    "Next carry-over run: {} (in {} seconds)",
                    next_run.format("%Y-%m-%d %H:%M:%S"),
                    duration_until_next.as_secs()
                );

                tokio::time::sleep(duration_until_next).await;

                let today = Local::now().date_naive();
                info!(
                    "⏰ [CARRY-OVER] Triggered at {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S %Z")
                );

                if let Err(e) =
                    run_carry_over(&processor, today - ChronoDuration::days(1), today).await
                {
                    error!("❌ [CARRY-OVER] Run failed: {}", e);
                }
            }
        })
    }
}
