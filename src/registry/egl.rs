use crate::registry::{FunctionSpec, VersionSpec};

pub const HEADERS: &[&str] = &["EGL/eglext.h"];

/// EGL extensions that do not add a function but are still queried.
pub const EXTENSIONS_EXTRA: &[&str] = &[
    "EGL_ANDROID_create_native_client_buffer",
    "EGL_ANDROID_front_buffer_auto_refresh",
    "EGL_ANGLE_display_semaphore_share_group",
    "EGL_ANGLE_display_texture_share_group",
    "EGL_ANGLE_context_virtualization",
    "EGL_ANGLE_create_context_backwards_compatible",
    "EGL_ANGLE_create_context_client_arrays",
    "EGL_ANGLE_create_context_webgl_compatibility",
    "EGL_ANGLE_iosurface_client_buffer",
    "EGL_ANGLE_keyed_mutex",
    "EGL_ANGLE_robust_resource_initialization",
    "EGL_ANGLE_surface_orientation",
    "EGL_ANGLE_window_fixed_size",
    "EGL_ARM_implicit_external_sync",
    "EGL_CHROMIUM_create_context_bind_generates_resource",
    "EGL_EXT_create_context_robustness",
    "EGL_EXT_gl_colorspace_display_p3",
    "EGL_EXT_gl_colorspace_display_p3_passthrough",
    "EGL_EXT_image_dma_buf_import",
    "EGL_EXT_pixel_format_float",
    "EGL_IMG_context_priority",
    "EGL_KHR_create_context",
    "EGL_KHR_gl_colorspace",
    "EGL_KHR_no_config_context",
    "EGL_KHR_surfaceless_context",
    "EGL_NV_robustness_video_memory_purge",
    "EGL_NOK_texture_from_pixmap",
];

/// EGL client extensions that do not add a function but are still queried.
pub const CLIENT_EXTENSIONS_EXTRA: &[&str] = &[
    "EGL_ANGLE_display_power_preference",
    "EGL_ANGLE_platform_angle",
    "EGL_ANGLE_platform_angle_d3d",
    "EGL_ANGLE_platform_angle_device_id",
    "EGL_ANGLE_platform_angle_device_type_egl_angle",
    "EGL_ANGLE_platform_angle_device_type_swiftshader",
    "EGL_ANGLE_platform_angle_metal",
    "EGL_ANGLE_platform_angle_null",
    "EGL_ANGLE_platform_angle_opengl",
    "EGL_ANGLE_platform_angle_vulkan",
    "EGL_EXT_platform_device",
    "EGL_MESA_platform_surfaceless",
];

pub fn functions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglAcquireExternalContextANGLE", &["EGL_ANGLE_external_context_and_surface"]),
            ],
            "EGLDisplay dpy, EGLSurface readAndDraw",
        ),
        FunctionSpec::names("EGLBoolean", &["eglBindAPI"], "EGLenum api"),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglBindTexImage"],
            "EGLDisplay dpy, EGLSurface surface, EGLint buffer",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglChooseConfig"],
            "EGLDisplay dpy, const EGLint* attrib_list, EGLConfig* configs, EGLint config_size, EGLint* num_config",
        ),
        FunctionSpec::names(
            "EGLint",
            &["eglClientWaitSync"],
            "EGLDisplay dpy, EGLSync sync, EGLint flags, EGLTime timeout",
        ),
        FunctionSpec::versions(
            "EGLint",
            vec![
                VersionSpec::ext("eglClientWaitSyncKHR", &["EGL_KHR_fence_sync", "GL_CHROMIUM_egl_khr_fence_sync_hack"]),
            ],
            "EGLDisplay dpy, EGLSyncKHR sync, EGLint flags, EGLTimeKHR timeout",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglCopyBuffers"],
            "EGLDisplay dpy, EGLSurface surface, EGLNativePixmapType target",
        ),
        FunctionSpec::versions(
            "void*",
            vec![
                VersionSpec::ext("eglCopyMetalSharedEventANGLE", &["EGL_ANGLE_metal_shared_event_sync"]),
            ],
            "EGLDisplay dpy, EGLSync sync",
        ),
        FunctionSpec::names(
            "EGLContext",
            &["eglCreateContext"],
            "EGLDisplay dpy, EGLConfig config, EGLContext share_context, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLImage",
            &["eglCreateImage"],
            "EGLDisplay dpy, EGLContext ctx, EGLenum target, EGLClientBuffer buffer, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLImageKHR",
            vec![
                VersionSpec::ext("eglCreateImageKHR", &["EGL_KHR_image_base", "EGL_KHR_gl_texture_2D_image"]),
            ],
            "EGLDisplay dpy, EGLContext ctx, EGLenum target, EGLClientBuffer buffer, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreatePbufferFromClientBuffer"],
            "EGLDisplay dpy, EGLenum buftype, void* buffer, EGLConfig config, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreatePbufferSurface"],
            "EGLDisplay dpy, EGLConfig config, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreatePixmapSurface"],
            "EGLDisplay dpy, EGLConfig config, EGLNativePixmapType pixmap, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreatePlatformPixmapSurface"],
            "EGLDisplay dpy, EGLConfig config, void* native_pixmap, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreatePlatformWindowSurface"],
            "EGLDisplay dpy, EGLConfig config, void* native_window, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLStreamKHR",
            vec![
                VersionSpec::ext("eglCreateStreamKHR", &["EGL_KHR_stream"]),
            ],
            "EGLDisplay dpy, const EGLint* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglCreateStreamProducerD3DTextureANGLE", &["EGL_ANGLE_stream_producer_d3d_texture"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, EGLAttrib* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSync",
            &["eglCreateSync"],
            "EGLDisplay dpy, EGLenum type, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLSyncKHR",
            vec![
                VersionSpec::ext("eglCreateSyncKHR", &["EGL_KHR_fence_sync", "GL_CHROMIUM_egl_khr_fence_sync_hack"]),
            ],
            "EGLDisplay dpy, EGLenum type, const EGLint* attrib_list",
        ),
        FunctionSpec::names(
            "EGLSurface",
            &["eglCreateWindowSurface"],
            "EGLDisplay dpy, EGLConfig config, EGLNativeWindowType win, const EGLint* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLint",
            vec![
                VersionSpec::client("eglDebugMessageControlKHR", &["EGL_KHR_debug"]),
            ],
            "EGLDEBUGPROCKHR callback, const EGLAttrib* attrib_list",
        )
        .known_as("eglDebugMessageControlKHR"),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglDestroyContext"],
            "EGLDisplay dpy, EGLContext ctx",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglDestroyImage"],
            "EGLDisplay dpy, EGLImage image",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglDestroyImageKHR", &["EGL_KHR_image_base"]),
            ],
            "EGLDisplay dpy, EGLImageKHR image",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglDestroyStreamKHR", &["EGL_KHR_stream"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglDestroySurface"],
            "EGLDisplay dpy, EGLSurface surface",
        ),
        FunctionSpec::names("EGLBoolean", &["eglDestroySync"], "EGLDisplay dpy, EGLSync sync"),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglDestroySyncKHR", &["EGL_KHR_fence_sync", "GL_CHROMIUM_egl_khr_fence_sync_hack"]),
            ],
            "EGLDisplay dpy, EGLSyncKHR sync",
        ),
        FunctionSpec::versions(
            "EGLint",
            vec![
                VersionSpec::ext("eglDupNativeFenceFDANDROID", &["EGL_ANDROID_native_fence_sync", "GL_CHROMIUM_egl_android_native_fence_sync_hack"]),
            ],
            "EGLDisplay dpy, EGLSyncKHR sync",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglExportDMABUFImageMESA", &["EGL_MESA_image_dma_buf_export"]),
            ],
            "EGLDisplay dpy, EGLImageKHR image, int* fds, EGLint* strides, EGLint* offsets",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglExportDMABUFImageQueryMESA", &["EGL_MESA_image_dma_buf_export"]),
            ],
            "EGLDisplay dpy, EGLImageKHR image, int* fourcc, int* num_planes, EGLuint64KHR* modifiers",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglExportVkImageANGLE", &["EGL_ANGLE_vulkan_image"]),
            ],
            "EGLDisplay dpy, EGLImageKHR image, void* vk_image, void* vk_image_create_info",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetCompositorTimingANDROID", &["EGL_ANDROID_get_frame_timestamps"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLint numTimestamps, EGLint* names, EGLnsecsANDROID* values",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetCompositorTimingSupportedANDROID", &["EGL_ANDROID_get_frame_timestamps"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLint timestamp",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglGetConfigAttrib"],
            "EGLDisplay dpy, EGLConfig config, EGLint attribute, EGLint* value",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglGetConfigs"],
            "EGLDisplay dpy, EGLConfig* configs, EGLint config_size, EGLint* num_config",
        ),
        FunctionSpec::names("EGLContext", &["eglGetCurrentContext"], "void"),
        FunctionSpec::names("EGLDisplay", &["eglGetCurrentDisplay"], "void"),
        FunctionSpec::names("EGLSurface", &["eglGetCurrentSurface"], "EGLint readdraw"),
        FunctionSpec::names("EGLDisplay", &["eglGetDisplay"], "EGLNativeDisplayType display_id"),
        FunctionSpec::names("EGLint", &["eglGetError"], "void"),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetFrameTimestampsANDROID", &["EGL_ANDROID_get_frame_timestamps"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLuint64KHR frameId, EGLint numTimestamps, EGLint* timestamps, EGLnsecsANDROID* values",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetFrameTimestampSupportedANDROID", &["EGL_ANDROID_get_frame_timestamps"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLint timestamp",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetMscRateANGLE", &["EGL_ANGLE_sync_control_rate"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLint* numerator, EGLint* denominator",
        ),
        FunctionSpec::versions(
            "EGLClientBuffer",
            vec![
                VersionSpec::ext("eglGetNativeClientBufferANDROID", &["EGL_ANDROID_get_native_client_buffer"]),
            ],
            "const struct AHardwareBuffer* ahardwarebuffer",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetNextFrameIdANDROID", &["EGL_ANDROID_get_frame_timestamps"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLuint64KHR* frameId",
        ),
        FunctionSpec::names(
            "EGLDisplay",
            &["eglGetPlatformDisplay"],
            "EGLenum platform, void* native_display, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::names(
            "__eglMustCastToProperFunctionPointerType",
            &["eglGetProcAddress"],
            "const char* procname",
        )
        .logging(r#"  GL_SERVICE_LOG("GL_RESULT: " << reinterpret_cast<void*>(result));"#),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglGetSyncAttrib"],
            "EGLDisplay dpy, EGLSync sync, EGLint attribute, EGLAttrib* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetSyncAttribKHR", &["EGL_KHR_fence_sync", "GL_CHROMIUM_egl_khr_fence_sync_hack"]),
            ],
            "EGLDisplay dpy, EGLSyncKHR sync, EGLint attribute, EGLint* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglGetSyncValuesCHROMIUM", &["EGL_CHROMIUM_sync_control"]),
            ],
            "EGLDisplay dpy, EGLSurface surface, EGLuint64CHROMIUM* ust, EGLuint64CHROMIUM* msc, EGLuint64CHROMIUM* sbc",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglHandleGPUSwitchANGLE", &["EGL_ANGLE_power_preference"]),
            ],
            "EGLDisplay dpy",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglImageFlushExternalEXT", &["EGL_EXT_image_flush_external"]),
            ],
            "EGLDisplay dpy, EGLImageKHR image, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglInitialize"],
            "EGLDisplay dpy, EGLint* major, EGLint* minor",
        ),
        FunctionSpec::versions(
            "EGLint",
            vec![
                VersionSpec::client("eglLabelObjectKHR", &["EGL_KHR_debug"]),
            ],
            "EGLDisplay display, EGLenum objectType, EGLObjectKHR object, EGLLabelKHR label",
        )
        .known_as("eglLabelObjectKHR"),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglMakeCurrent"],
            "EGLDisplay dpy, EGLSurface draw, EGLSurface read, EGLContext ctx",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglPostSubBufferNV"],
            "EGLDisplay dpy, EGLSurface surface, EGLint x, EGLint y, EGLint width, EGLint height",
        ),
        FunctionSpec::names("EGLenum", &["eglQueryAPI"], "void"),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglQueryContext"],
            "EGLDisplay dpy, EGLContext ctx, EGLint attribute, EGLint* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::client("eglQueryDebugKHR", &["EGL_KHR_debug"]),
            ],
            "EGLint attribute, EGLAttrib* value",
        )
        .known_as("eglQueryDebugKHR"),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::client("eglQueryDeviceAttribEXT", &["EGL_EXT_device_query"]),
            ],
            "EGLDeviceEXT device, EGLint attribute, EGLAttrib* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::client("eglQueryDevicesEXT", &["EGL_EXT_device_enumeration"]),
            ],
            "EGLint max_devices, EGLDeviceEXT* devices, EGLint* num_devices",
        )
        .known_as("eglQueryDevicesEXT"),
        FunctionSpec::versions(
            "const char *",
            vec![
                VersionSpec::client("eglQueryDeviceStringEXT", &["EGL_EXT_device_query"]),
            ],
            "EGLDeviceEXT device, EGLint name",
        )
        .known_as("eglQueryDeviceStringEXT"),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::client("eglQueryDisplayAttribANGLE", &["EGL_ANGLE_feature_control"]),
            ],
            "EGLDisplay dpy, EGLint attribute, EGLAttrib* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::client("eglQueryDisplayAttribEXT", &["EGL_EXT_device_query"]),
            ],
            "EGLDisplay dpy, EGLint attribute, EGLAttrib* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglQueryDmaBufFormatsEXT", &["EGL_EXT_image_dma_buf_import_modifiers"]),
            ],
            "EGLDisplay dpy, EGLint max_formats, EGLint* formats, EGLint* num_formats",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglQueryDmaBufModifiersEXT", &["EGL_EXT_image_dma_buf_import_modifiers"]),
            ],
            "EGLDisplay dpy, EGLint format, EGLint max_modifiers, EGLuint64KHR* modifiers, EGLBoolean* external_only, EGLint* num_modifiers",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglQueryStreamKHR", &["EGL_KHR_stream"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, EGLenum attribute, EGLint* value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglQueryStreamu64KHR", &["EGL_KHR_stream"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, EGLenum attribute, EGLuint64KHR* value",
        ),
        FunctionSpec::names("const char*", &["eglQueryString"], "EGLDisplay dpy, EGLint name"),
        FunctionSpec::versions(
            "const char *",
            vec![
                VersionSpec::client("eglQueryStringiANGLE", &["EGL_ANGLE_feature_control"]),
            ],
            "EGLDisplay dpy, EGLint name, EGLint index",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglQuerySurface"],
            "EGLDisplay dpy, EGLSurface surface, EGLint attribute, EGLint* value",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglQuerySurfacePointerANGLE"],
            "EGLDisplay dpy, EGLSurface surface, EGLint attribute, void** value",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglReacquireHighPowerGPUANGLE", &["EGL_ANGLE_power_preference"]),
            ],
            "EGLDisplay dpy, EGLContext ctx",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglReleaseExternalContextANGLE", &["EGL_ANGLE_external_context_and_surface"]),
            ],
            "EGLDisplay dpy",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglReleaseHighPowerGPUANGLE", &["EGL_ANGLE_power_preference"]),
            ],
            "EGLDisplay dpy, EGLContext ctx",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglReleaseTexImage"],
            "EGLDisplay dpy, EGLSurface surface, EGLint buffer",
        ),
        FunctionSpec::names("EGLBoolean", &["eglReleaseThread"], "void"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglSetBlobCacheFuncsANDROID", &["EGL_ANDROID_blob_cache"]),
            ],
            "EGLDisplay dpy, EGLSetBlobFuncANDROID set, EGLGetBlobFuncANDROID get",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamAttribKHR", &["EGL_KHR_stream"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, EGLenum attribute, EGLint value",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamConsumerAcquireKHR", &["EGL_KHR_stream_consumer_gltexture"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamConsumerGLTextureExternalAttribsNV", &["EGL_NV_stream_consumer_gltexture_yuv"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, EGLAttrib* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamConsumerGLTextureExternalKHR", &["EGL_KHR_stream_consumer_gltexture"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamConsumerReleaseKHR", &["EGL_KHR_stream_consumer_gltexture"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![
                VersionSpec::ext("eglStreamPostD3DTextureANGLE", &["EGL_ANGLE_stream_producer_d3d_texture"]),
            ],
            "EGLDisplay dpy, EGLStreamKHR stream, void* texture, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglSurfaceAttrib"],
            "EGLDisplay dpy, EGLSurface surface, EGLint attribute, EGLint value",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglSwapBuffers"],
            "EGLDisplay dpy, EGLSurface surface",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglSwapBuffersWithDamageKHR"],
            "EGLDisplay dpy, EGLSurface surface, EGLint* rects, EGLint n_rects",
        ),
        FunctionSpec::names(
            "EGLBoolean",
            &["eglSwapInterval"],
            "EGLDisplay dpy, EGLint interval",
        ),
        FunctionSpec::names("EGLBoolean", &["eglTerminate"], "EGLDisplay dpy"),
        FunctionSpec::names("EGLBoolean", &["eglWaitClient"], "void"),
        FunctionSpec::names("EGLBoolean", &["eglWaitGL"], "void"),
        FunctionSpec::names("EGLBoolean", &["eglWaitNative"], "EGLint engine"),
        FunctionSpec::names(
            "EGLint",
            &["eglWaitSync"],
            "EGLDisplay dpy, EGLSync sync, EGLint flags",
        ),
        FunctionSpec::versions(
            "EGLint",
            vec![
                VersionSpec::ext("eglWaitSyncKHR", &["EGL_KHR_wait_sync"]),
            ],
            "EGLDisplay dpy, EGLSyncKHR sync, EGLint flags",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("eglWaitUntilWorkScheduledANGLE", &["EGL_ANGLE_wait_until_work_scheduled"]),
            ],
            "EGLDisplay dpy",
        ),
    ]
}
