//! Canonical compressors.

/// Compress, keeping the newer of the two items.
pub fn prefer_newer<T>(_old: T, new: T) -> T {
    new
}

/// Compress, keeping the older of the two items.
pub fn prefer_older<T>(old: T, _new: T) -> T {
    old
}
