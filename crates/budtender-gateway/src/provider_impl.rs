use std::{future::Future, pin::Pin};

use budtender_core::{
    error::Result,
    provider::{CompletionBackend, CompletionParams, CompletionReply},
};

use crate::{api::ChatCompletionRequest, error::GatewayError, GatewayClient};

impl CompletionBackend for GatewayClient {
    fn complete<'p>(
        &'p self,
        params: CompletionParams,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionReply>> + Send + 'p>> {
        Box::pin(async move {
            let messages = params.messages.into_iter().map(Into::into).collect();
            let mut request = ChatCompletionRequest::new(self.model().to_owned(), messages);
            if let Some(tool) = params.tool {
                request = request.with_forced_tool(tool);
            }

            let response = self.chat_completion(request).await?;

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(GatewayError::Format("response has no choices".into()).into());
            };

            Ok(first_choice.message.into())
        })
    }
}
