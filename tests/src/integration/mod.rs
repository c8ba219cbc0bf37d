//! Cross-subsystem flows driven through `LedgerRuntime::dispatch`.

#[cfg(test)]
mod errors;
#[cfg(test)]
mod events;
#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod trade_flow;
