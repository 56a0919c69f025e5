use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::config::Region;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use std::sync::Arc;

mod config;
mod context;
mod entrypoint;
mod handler;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    entrypoint::init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env()?;

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let parameter_store = service::ssm::ParameterStore::new(aws_sdk_ssm::Client::new(&aws_config));
    tracing::trace!("initialized parameter store client");

    // The destination bucket is resolved exactly once for the life of
    // this process; a process that cannot learn it never serves traffic.
    let target_bucket = parameter_store
        .get_parameter(&config.target_bucket_parameter)
        .await
        .context("could not resolve the target bucket parameter")?;
    tracing::info!(target_bucket, "resolved target bucket");

    let ctx = context::Context {
        s3_client: Arc::new(s3_client),
        target_bucket,
        thumbnail_size: config.thumbnail_size,
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler::handler(ctx, event).await }
    });

    run(func).await
}
