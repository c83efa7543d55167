mod forum;
mod order;
mod payment;
mod post;
mod user;
