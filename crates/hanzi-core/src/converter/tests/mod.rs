mod fallback;
mod properties;
