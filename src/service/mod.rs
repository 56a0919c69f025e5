pub mod image;
pub mod s3;
pub mod ssm;
