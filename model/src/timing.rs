// ============================================================================
// Debounce / Throttle
// ============================================================================
//
// Each wrapper is its own object with its own pending state; nothing is
// shared between call sites. The DOM layer owns the actual timer handle.
//
//   Debouncer: call() records the latest args and hands out a ticket. The
//              caller arms a `wait_ms` timer for that ticket; fire(ticket)
//              releases the args only if no newer call has been made, so
//              every burst collapses to one run with the last args.
//
//   Throttle:  try_fire(now) says yes on the first call, then no until the
//              cooldown has elapsed; the next yes restarts the cooldown.
//
// ============================================================================

/// Delays a call until `wait_ms` passes with no newer call.
#[derive(Debug)]
pub struct Debouncer<A> {
    wait_ms: u32,
    ticket: u32,
    pending: Option<A>,
}

impl<A> Debouncer<A> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            ticket: 0,
            pending: None,
        }
    }

    /// How long the caller's timer should wait after each `call`.
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record a call, replacing any pending args. Earlier tickets go stale.
    pub fn call(&mut self, args: A) -> u32 {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = Some(args);
        self.ticket
    }

    /// The timer armed for `ticket` ran out. Returns the pending args if
    /// that ticket is still the latest.
    pub fn fire(&mut self, ticket: u32) -> Option<A> {
        if ticket != self.ticket {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending call without running it.
    pub fn cancel(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = None;
    }
}

/// Lets a call through at most once per `limit_ms`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    /// When the current cooldown ends. `None` means no cooldown is running.
    open_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            open_at: None,
        }
    }

    /// Returns true if the call should run now, starting a new cooldown.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }
}
