multiversx_sc::imports!();

use common_constants::{LEGACY_MARKET_STATE_VERSION, MARKET_STATE_VERSION};
use common_errors::ERROR_UNSUPPORTED_STATE_VERSION;

use crate::storage;

#[multiversx_sc::module]
pub trait MigrationModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Rewrites the stored state in the current layout.
    ///
    /// Version 1 predates supply caps and is carried over with an unlimited cap. Balances,
    /// totals and indices are kept as they are.
    fn migrate_state(&self) {
        let version = self.state_version().get();
        if version == MARKET_STATE_VERSION {
            return;
        }

        require!(
            version == LEGACY_MARKET_STATE_VERSION,
            ERROR_UNSUPPORTED_STATE_VERSION
        );

        let legacy = self.market_state_v1().get();
        self.market_state()
            .set(legacy.into_current(self.max_uint256()));
        self.state_version().set(MARKET_STATE_VERSION);

        self.state_migrated_event(version, MARKET_STATE_VERSION);
    }
}
