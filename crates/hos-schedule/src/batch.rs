//! Scheduling many independent trips.
//!
//! Each trip is scheduled from its own private state, so trips can run
//! concurrently without locking.  With the `parallel` feature the batch is
//! spread across Rayon's thread pool; results are returned in input order
//! either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use hos_core::DutyEvent;

use crate::{ScheduleResult, TripRequest};

/// Schedule every request, one result per request, in input order.
pub fn schedule_batch(requests: &[TripRequest]) -> Vec<ScheduleResult<Vec<DutyEvent>>> {
    #[cfg(feature = "parallel")]
    {
        requests.par_iter().map(TripRequest::schedule).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        requests.iter().map(TripRequest::schedule).collect()
    }
}
