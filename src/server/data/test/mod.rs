mod completion;
mod dashboard;
mod export;
mod family;
mod member;
