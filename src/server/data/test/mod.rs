mod faq;
mod inscription;
mod participation;
mod user;
mod verification_code;
