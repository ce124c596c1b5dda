mod fill;
mod helpers;
