use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::dto::{
    AuthResponseDto, LoginRequestDto, OtpResponseDto, ResendEmailRequestDto, SignupRequestDto,
    SignupResponseDto, UpdateFullNameRequestDto, UpdateFullNameResponseDto,
    UpdateUsernameRequestDto, UpdateUsernameResponseDto, VerifyEmailRequestDto,
    VerifyPasswordRequestDto, VerifyPasswordResponseDto,
};
use crate::api::error::ApiError;
use crate::config::SecureString;

impl ApiClient {
    pub async fn login(&self, body: &LoginRequestDto) -> Result<AuthResponseDto, ApiError> {
        self.call(Method::POST, "/auth/login").json(body).send().await
    }

    pub async fn signup(&self, body: &SignupRequestDto) -> Result<SignupResponseDto, ApiError> {
        self.call(Method::POST, "/auth/signup").json(body).send().await
    }

    pub async fn verify_email(
        &self,
        body: &VerifyEmailRequestDto,
    ) -> Result<AuthResponseDto, ApiError> {
        self.call(Method::POST, "/auth/verify-email")
            .json(body)
            .send()
            .await
    }

    pub async fn resend_verification_email(
        &self,
        body: &ResendEmailRequestDto,
    ) -> Result<OtpResponseDto, ApiError> {
        self.call(Method::POST, "/auth/resend-verification-email")
            .json(body)
            .send()
            .await
    }

    pub async fn verify_password(
        &self,
        token: &SecureString,
        body: &VerifyPasswordRequestDto,
    ) -> Result<VerifyPasswordResponseDto, ApiError> {
        self.call(Method::POST, "/auth/verify-password")
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn update_full_name(
        &self,
        token: &SecureString,
        body: &UpdateFullNameRequestDto,
    ) -> Result<UpdateFullNameResponseDto, ApiError> {
        self.call(Method::PATCH, "/auth/user/fullname")
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn update_username(
        &self,
        token: &SecureString,
        body: &UpdateUsernameRequestDto,
    ) -> Result<UpdateUsernameResponseDto, ApiError> {
        self.call(Method::PATCH, "/auth/user/username")
            .bearer(token)
            .json(body)
            .send()
            .await
    }
}
