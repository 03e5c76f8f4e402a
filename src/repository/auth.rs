use crate::api::dto::{
    EmailRequestDto, LoginRequestDto, ResendEmailRequestDto, SignupRequestDto,
    UpdateFullNameRequestDto, UpdateUsernameRequestDto, VerifyEmailRequestDto,
    VerifyPasswordRequestDto,
};
use crate::api::{ApiClient, EmailService};
use crate::config::SecureString;
use crate::domain::{
    AuthResponse, LoginRequest, OtpResponse, SignupRequest, SignupResponse,
    UpdateFullNameRequest, UpdateFullNameResponse, UpdateUsernameRequest,
    UpdateUsernameResponse, VerifyEmailRequest, VerifyPasswordRequest,
};
use crate::resource::{resource_stream, ResourceStream};

/// Reachability verdicts that count as a usable address.
const REACHABLE: [&str; 2] = ["safe", "risky"];

pub trait AuthRepository: Send + Sync {
    /// `true` when the address can receive mail.
    fn check_email_validity(&self, email: String) -> ResourceStream<bool>;

    fn login(&self, request: LoginRequest) -> ResourceStream<AuthResponse>;

    fn signup(&self, request: SignupRequest) -> ResourceStream<SignupResponse>;

    fn verify_email(&self, request: VerifyEmailRequest) -> ResourceStream<AuthResponse>;

    fn resend_otp(&self, email: String) -> ResourceStream<OtpResponse>;

    /// `true` when the password matches the signed-in user.
    fn verify_password(
        &self,
        token: SecureString,
        request: VerifyPasswordRequest,
    ) -> ResourceStream<bool>;

    fn update_full_name(
        &self,
        token: SecureString,
        request: UpdateFullNameRequest,
    ) -> ResourceStream<UpdateFullNameResponse>;

    fn update_username(
        &self,
        token: SecureString,
        request: UpdateUsernameRequest,
    ) -> ResourceStream<UpdateUsernameResponse>;
}

pub struct RemoteAuthRepository {
    api: ApiClient,
    email: EmailService,
}

impl RemoteAuthRepository {
    pub fn new(api: ApiClient, email: EmailService) -> Self {
        Self { api, email }
    }
}

impl AuthRepository for RemoteAuthRepository {
    fn check_email_validity(&self, email: String) -> ResourceStream<bool> {
        let service = self.email.clone();
        resource_stream("check_email_validity", async move {
            let response = service
                .check_email(&EmailRequestDto { to_email: email })
                .await?;
            Ok(REACHABLE.contains(&response.is_reachable.as_str()))
        })
    }

    fn login(&self, request: LoginRequest) -> ResourceStream<AuthResponse> {
        let api = self.api.clone();
        resource_stream("login", async move {
            let body = LoginRequestDto::from(request);
            api.login(&body).await.map(AuthResponse::from)
        })
    }

    fn signup(&self, request: SignupRequest) -> ResourceStream<SignupResponse> {
        let api = self.api.clone();
        resource_stream("signup", async move {
            let body = SignupRequestDto::from(request);
            api.signup(&body).await.map(SignupResponse::from)
        })
    }

    fn verify_email(&self, request: VerifyEmailRequest) -> ResourceStream<AuthResponse> {
        let api = self.api.clone();
        resource_stream("verify_email", async move {
            let body = VerifyEmailRequestDto::from(request);
            api.verify_email(&body).await.map(AuthResponse::from)
        })
    }

    fn resend_otp(&self, email: String) -> ResourceStream<OtpResponse> {
        let api = self.api.clone();
        resource_stream("resend_otp", async move {
            api.resend_verification_email(&ResendEmailRequestDto { email })
                .await
                .map(OtpResponse::from)
        })
    }

    fn verify_password(
        &self,
        token: SecureString,
        request: VerifyPasswordRequest,
    ) -> ResourceStream<bool> {
        let api = self.api.clone();
        resource_stream("verify_password", async move {
            let body = VerifyPasswordRequestDto::from(request);
            api.verify_password(&token, &body)
                .await
                .map(|response| response.success)
        })
    }

    fn update_full_name(
        &self,
        token: SecureString,
        request: UpdateFullNameRequest,
    ) -> ResourceStream<UpdateFullNameResponse> {
        let api = self.api.clone();
        resource_stream("update_full_name", async move {
            let body = UpdateFullNameRequestDto::from(request);
            api.update_full_name(&token, &body)
                .await
                .map(UpdateFullNameResponse::from)
        })
    }

    fn update_username(
        &self,
        token: SecureString,
        request: UpdateUsernameRequest,
    ) -> ResourceStream<UpdateUsernameResponse> {
        let api = self.api.clone();
        resource_stream("update_username", async move {
            let body = UpdateUsernameRequestDto::from(request);
            api.update_username(&token, &body)
                .await
                .map(UpdateUsernameResponse::from)
        })
    }
}
