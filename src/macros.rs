/// Helper macro for locking items, mapping a poisoned lock to [`crate::Error::LockError`]
///
/// ```rust, ignore
///  let mut sink = lock!(self.sink)?;
///  sink.write_line("root")?;
/// ```
macro_rules! lock {
    ($lock:expr) => {
        $lock.lock().map_err(|_| crate::Error::LockError)
    };
}
