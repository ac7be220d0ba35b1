use crate::registry::{FunctionSpec, VersionSpec};

pub const HEADERS: &[&str] = &[
    "GL/gl.h",
    "noninclude/GL/glext.h",
    "GLES2/gl2ext.h",
    "GLES3/gl3.h",
    "GLES3/gl31.h",
    "GLES3/gl32.h",
    // Chromium-specific headers shipped with the repo.
    "GL/glextchromium.h",
    "GLES2/gl2chromium.h",
    "GLES2/gl2extchromium.h",
];

/// Extensions that do not add any function but are still queried.
pub const EXTRA_EXTENSIONS: &[&str] = &[
    "GL_ANGLE_renderability_validation",
    "GL_ANGLE_robust_resource_initialization",
    "GL_ANGLE_webgl_compatibility",
    "GL_ARB_texture_swizzle",
    "GL_EXT_texture_swizzle",
    "GL_EXT_texture_format_BGRA8888",
    "GL_EXT_unpack_subimage",
];

pub fn functions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glAcquireTexturesANGLE", &["GL_ANGLE_vulkan_image"]),
            ],
            "GLuint numTextures, const GLuint* textures, const GLenum* layouts",
        ),
        FunctionSpec::names(
            "void",
            &["glActiveShaderProgram"],
            "GLuint pipeline, GLuint program",
        ),
        FunctionSpec::names("void", &["glActiveTexture"], "GLenum texture"),
        FunctionSpec::names("void", &["glAttachShader"], "GLuint program, GLuint shader"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBeginPixelLocalStorageANGLE", &["GL_ANGLE_shader_pixel_local_storage"]),
            ],
            "GLsizei n, const GLenum* loadops",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBeginQuery"),
                VersionSpec::core("glBeginQueryARB"),
                VersionSpec::ext("glBeginQueryEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLenum target, GLuint id",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBeginTransformFeedback"),
                VersionSpec::core("glBeginTransformFeedbackEXT"),
            ],
            "GLenum primitiveMode",
        ),
        FunctionSpec::names(
            "void",
            &["glBindAttribLocation"],
            "GLuint program, GLuint index, const char* name",
        ),
        FunctionSpec::names("void", &["glBindBuffer"], "GLenum target, GLuint buffer"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBindBufferBase"),
                VersionSpec::core("glBindBufferBaseEXT"),
            ],
            "GLenum target, GLuint index, GLuint buffer",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBindBufferRange"),
                VersionSpec::core("glBindBufferRangeEXT"),
            ],
            "GLenum target, GLuint index, GLuint buffer, GLintptr offset, GLsizeiptr size",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindFragDataLocation", &["GL_ARB_blend_func_extended"]),
                VersionSpec::ext("glBindFragDataLocationEXT", &["GL_EXT_blend_func_extended"]),
            ],
            "GLuint program, GLuint colorNumber, const char* name",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindFragDataLocationIndexed", &["GL_ARB_blend_func_extended"]),
                VersionSpec::ext("glBindFragDataLocationIndexedEXT", &["GL_EXT_blend_func_extended"]),
            ],
            "GLuint program, GLuint colorNumber, GLuint index, const char* name",
        ),
        FunctionSpec::names(
            "void",
            &["glBindFramebufferEXT", "glBindFramebuffer"],
            "GLenum target, GLuint framebuffer",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindImageTexture", &["GL_ARB_shader_image_load_store"]),
                VersionSpec::ext("glBindImageTextureEXT", &["GL_EXT_shader_image_load_store"]),
            ],
            "GLuint index, GLuint texture, GLint level, GLboolean layered,GLint layer, GLenum access, GLint format",
        )
        .known_as("glBindImageTextureEXT"),
        FunctionSpec::names("void", &["glBindProgramPipeline"], "GLuint pipeline"),
        FunctionSpec::names(
            "void",
            &["glBindRenderbufferEXT", "glBindRenderbuffer"],
            "GLenum target, GLuint renderbuffer",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindSampler", &["GL_ARB_sampler_objects"]),
            ],
            "GLuint unit, GLuint sampler",
        ),
        FunctionSpec::names("void", &["glBindTexture"], "GLenum target, GLuint texture"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindTransformFeedback", &["GL_ARB_transform_feedback2"]),
            ],
            "GLenum target, GLuint id",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindUniformLocationCHROMIUM", &["GL_CHROMIUM_bind_uniform_location"]),
            ],
            "GLuint program, GLint location, const char* name",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindVertexArray", &["GL_ARB_vertex_array_object"]),
                VersionSpec::core("glBindVertexArrayOES"),
                VersionSpec::ext("glBindVertexArrayAPPLE", &["GL_APPLE_vertex_array_object"]),
            ],
            "GLuint array",
        )
        .known_as("glBindVertexArrayOES"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBlendBarrierNV", &["GL_NV_blend_equation_advanced"]),
                VersionSpec::ext("glBlendBarrierKHR", &["GL_KHR_blend_equation_advanced"]),
            ],
            "void",
        )
        .known_as("glBlendBarrierKHR"),
        FunctionSpec::names(
            "void",
            &["glBlendColor"],
            "GLclampf red, GLclampf green, GLclampf blue, GLclampf alpha",
        ),
        FunctionSpec::names("void", &["glBlendEquation"], " GLenum mode "),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBlendEquationi"),
                VersionSpec::ext("glBlendEquationiOES", &["GL_OES_draw_buffers_indexed"]),
            ],
            " GLuint buf, GLenum mode ",
        )
        .known_as("glBlendEquationiOES"),
        FunctionSpec::names(
            "void",
            &["glBlendEquationSeparate"],
            "GLenum modeRGB, GLenum modeAlpha",
        ),
        FunctionSpec::names("void", &["glBlendFunc"], "GLenum sfactor, GLenum dfactor"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glBlendFunci"),
                VersionSpec::ext("glBlendFunciOES", &["GL_OES_draw_buffers_indexed"]),
            ],
            "GLuint buf, GLenum sfactor, GLenum dfactor",
        )
        .known_as("glBlendFunciOES"),
        FunctionSpec::names(
            "void",
            &["glBlendFuncSeparate"],
            "GLenum srcRGB, GLenum dstRGB, GLenum srcAlpha, GLenum dstAlpha",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBlitFramebuffer", &["GL_ARB_framebuffer_object"]),
                VersionSpec::ext("glBlitFramebufferNV", &["GL_NV_framebuffer_blit"]),
                VersionSpec::core("glBlitFramebufferANGLE"),
                VersionSpec::core("glBlitFramebufferEXT"),
            ],
            "GLint srcX0, GLint srcY0, GLint srcX1, GLint srcY1, GLint dstX0, GLint dstY0, GLint dstX1, GLint dstY1, GLbitfield mask, GLenum filter",
        ),
        FunctionSpec::names(
            "void",
            &["glBufferData"],
            "GLenum target, GLsizeiptr size, const void* data, GLenum usage",
        ),
        FunctionSpec::names(
            "void",
            &["glBufferSubData"],
            "GLenum target, GLintptr offset, GLsizeiptr size, const void* data",
        ),
        FunctionSpec::names(
            "GLenum",
            &["glCheckFramebufferStatusEXT", "glCheckFramebufferStatus"],
            "GLenum target",
        )
        .logging(r#"  GL_SERVICE_LOG("GL_RESULT: " << GLEnums::GetStringEnum(result));"#),
        FunctionSpec::names("void", &["glClear"], "GLbitfield mask"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glClearBufferfi"),
            ],
            "GLenum buffer, GLint drawbuffer, const GLfloat depth, GLint stencil",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glClearBufferfv"),
            ],
            "GLenum buffer, GLint drawbuffer, const GLfloat* value",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glClearBufferiv"),
            ],
            "GLenum buffer, GLint drawbuffer, const GLint* value",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glClearBufferuiv"),
            ],
            "GLenum buffer, GLint drawbuffer, const GLuint* value",
        ),
        FunctionSpec::names(
            "void",
            &["glClearColor"],
            "GLclampf red, GLclampf green, GLclampf blue, GLclampf alpha",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glClearDepth", &["GL_CHROMIUM_gles_depth_binding_hack"]),
            ],
            "GLclampd depth",
        ),
        FunctionSpec::names("void", &["glClearDepthf"], "GLclampf depth"),
        FunctionSpec::names("void", &["glClearStencil"], "GLint s"),
        FunctionSpec::versions(
            "GLenum",
            vec![
                VersionSpec::ext("glClientWaitSync", &["GL_ARB_sync"]),
            ],
            "GLsync sync, GLbitfield flags, GLuint64 timeout",
        ),
        FunctionSpec::versions(
            "GLenum",
            vec![
                VersionSpec::ext("glClientWaitSyncAPPLE", &["GL_APPLE_sync"]),
            ],
            "GLsync sync, GLbitfield flags, GLuint64 timeout",
        ),
        FunctionSpec::names(
            "void",
            &["glColorMask"],
            "GLboolean red, GLboolean green, GLboolean blue, GLboolean alpha",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glColorMaski"),
                VersionSpec::ext("glColorMaskiOES", &["GL_OES_draw_buffers_indexed"]),
            ],
            "GLuint buf, GLboolean red, GLboolean green, GLboolean blue, GLboolean alpha",
        )
        .known_as("glColorMaskiOES"),
        FunctionSpec::names("void", &["glCompileShader"], "GLuint shader"),
        FunctionSpec::names(
            "void",
            &["glCompressedTexImage2D"],
            "GLenum target, GLint level, GLenum internalformat, GLsizei width, GLsizei height, GLint border, GLsizei imageSize, const void* data",
        ),
        FunctionSpec::names(
            "void",
            &["glCompressedTexSubImage2D"],
            "GLenum target, GLint level, GLint xoffset, GLint yoffset, GLsizei width, GLsizei height, GLenum format, GLsizei imageSize, const void* data",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glCopyBufferSubData"),
            ],
            "GLenum readTarget, GLenum writeTarget, GLintptr readOffset, GLintptr writeOffset, GLsizeiptr size",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glCopySubTextureCHROMIUM", &["GL_CHROMIUM_copy_texture"]),
            ],
            "GLuint sourceId, GLint sourceLevel, GLenum destTarget, GLuint destId, GLint destLevel, GLint xoffset, GLint yoffset, GLint x, GLint y, GLsizei width, GLsizei height, GLboolean unpackFlipY, GLboolean unpackPremultiplyAlpha, GLboolean unpackUnmultiplyAlpha",
        ),
        FunctionSpec::names(
            "void",
            &["glCopyTexImage2D"],
            "GLenum target, GLint level, GLenum internalformat, GLint x, GLint y, GLsizei width, GLsizei height, GLint border",
        ),
        FunctionSpec::names(
            "void",
            &["glCopyTexSubImage2D"],
            "GLenum target, GLint level, GLint xoffset, GLint yoffset, GLint x, GLint y, GLsizei width, GLsizei height",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glCopyTextureCHROMIUM", &["GL_CHROMIUM_copy_texture"]),
            ],
            "GLuint sourceId, GLint sourceLevel, GLenum destTarget, GLuint destId, GLint destLevel, GLint internalFormat, GLenum destType, GLboolean unpackFlipY, GLboolean unpackPremultiplyAlpha, GLboolean unpackUnmultiplyAlpha",
        ),
        FunctionSpec::names("GLuint", &["glCreateProgram"], "void"),
        FunctionSpec::names("GLuint", &["glCreateShader"], "GLenum type"),
        FunctionSpec::names("void", &["glCullFace"], "GLenum mode"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glDebugMessageCallback"),
                VersionSpec::ext("glDebugMessageCallbackKHR", &["GL_KHR_debug"]),
            ],
            "GLDEBUGPROC callback, const void* userParam",
        ),
        FunctionSpec::names("void", &["glDeleteBuffers"], "GLsizei n, const GLuint* buffers")
        .known_as("glDeleteBuffersARB"),
        FunctionSpec::names("void", &["glDeleteFencesNV"], "GLsizei n, const GLuint* fences"),
        FunctionSpec::names(
            "void",
            &["glDeleteFramebuffersEXT", "glDeleteFramebuffers"],
            "GLsizei n, const GLuint* framebuffers",
        ),
        FunctionSpec::names("void", &["glDeleteProgram"], "GLuint program"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glDeleteQueries"),
                VersionSpec::core("glDeleteQueriesARB"),
                VersionSpec::ext("glDeleteQueriesEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLsizei n, const GLuint* ids",
        ),
        FunctionSpec::names(
            "void",
            &["glDeleteRenderbuffersEXT", "glDeleteRenderbuffers"],
            "GLsizei n, const GLuint* renderbuffers",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDeleteSamplers", &["GL_ARB_sampler_objects"]),
            ],
            "GLsizei n, const GLuint* samplers",
        ),
        FunctionSpec::names("void", &["glDeleteShader"], "GLuint shader"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDeleteSync", &["GL_ARB_sync"]),
            ],
            "GLsync sync",
        ),
        FunctionSpec::names("void", &["glDeleteTextures"], "GLsizei n, const GLuint* textures"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDeleteTransformFeedbacks", &["GL_ARB_transform_feedback2"]),
            ],
            "GLsizei n, const GLuint* ids",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDeleteVertexArrays", &["GL_ARB_vertex_array_object"]),
                VersionSpec::core("glDeleteVertexArraysOES"),
                VersionSpec::ext("glDeleteVertexArraysAPPLE", &["GL_APPLE_vertex_array_object"]),
            ],
            "GLsizei n, const GLuint* arrays",
        )
        .known_as("glDeleteVertexArraysOES"),
        FunctionSpec::names("void", &["glDepthFunc"], "GLenum func"),
        FunctionSpec::names("void", &["glDepthMask"], "GLboolean flag"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDepthRange", &["GL_CHROMIUM_gles_depth_binding_hack"]),
            ],
            "GLclampd zNear, GLclampd zFar",
        ),
        FunctionSpec::names("void", &["glDepthRangef"], "GLclampf zNear, GLclampf zFar"),
        FunctionSpec::names("void", &["glDetachShader"], "GLuint program, GLuint shader"),
        FunctionSpec::names("void", &["glDisable"], "GLenum cap"),
        FunctionSpec::names("void", &["glDisableVertexAttribArray"], "GLuint index"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glDiscardFramebufferEXT", &["GL_EXT_discard_framebuffer"]),
            ],
            "GLenum target, GLsizei numAttachments, const GLenum* attachments",
        ),
        FunctionSpec::names(
            "void",
            &["glDrawArrays"],
            "GLenum mode, GLint first, GLsizei count",
        ),
        FunctionSpec::names(
            "void",
            &["glDrawArraysInstancedARB", "glDrawArraysInstancedANGLE", "glDrawArraysInstanced"],
            "GLenum mode, GLint first, GLsizei count, GLsizei primcount",
        )
        .known_as("glDrawArraysInstancedANGLE"),
        FunctionSpec::names("void", &["glDrawBuffer"], "GLenum mode"),
        FunctionSpec::names(
            "void",
            &["glDrawBuffersARB", "glDrawBuffersEXT", "glDrawBuffers"],
            "GLsizei n, const GLenum* bufs",
        ),
        FunctionSpec::names(
            "void",
            &["glDrawElements"],
            "GLenum mode, GLsizei count, GLenum type, const void* indices",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glDrawRangeElements"),
            ],
            "GLenum mode, GLuint start, GLuint end, GLsizei count, GLenum type, const void* indices",
        ),
        FunctionSpec::names("void", &["glEnable"], "GLenum cap"),
        FunctionSpec::names("void", &["glEnableVertexAttribArray"], "GLuint index"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glEndQuery"),
                VersionSpec::core("glEndQueryARB"),
                VersionSpec::ext("glEndQueryEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLenum target",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glEndTransformFeedback"),
                VersionSpec::core("glEndTransformFeedbackEXT"),
            ],
            "void",
        ),
        FunctionSpec::versions(
            "GLsync",
            vec![
                VersionSpec::ext("glFenceSync", &["GL_ARB_sync"]),
            ],
            "GLenum condition, GLbitfield flags",
        ),
        FunctionSpec::versions(
            "GLsync",
            vec![
                VersionSpec::ext("glFenceSyncAPPLE", &["GL_APPLE_sync"]),
            ],
            "GLenum condition, GLbitfield flags",
        ),
        FunctionSpec::names("void", &["glFinish"], "void"),
        FunctionSpec::names("void", &["glFinishFenceNV"], "GLuint fence"),
        FunctionSpec::names("void", &["glFlush"], "void"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glFlushMappedBufferRange", &["GL_ARB_map_buffer_range"]),
                VersionSpec::core("glFlushMappedBufferRangeEXT"),
            ],
            "GLenum target, GLintptr offset, GLsizeiptr length",
        ),
        FunctionSpec::names(
            "void",
            &["glFramebufferRenderbufferEXT", "glFramebufferRenderbuffer"],
            "GLenum target, GLenum attachment, GLenum renderbuffertarget, GLuint renderbuffer",
        ),
        FunctionSpec::names(
            "void",
            &["glFramebufferTexture2DEXT", "glFramebufferTexture2D"],
            "GLenum target, GLenum attachment, GLenum textarget, GLuint texture, GLint level",
        ),
        FunctionSpec::names("void", &["glFrontFace"], "GLenum mode"),
        FunctionSpec::names("void", &["glGenBuffers"], "GLsizei n, GLuint* buffers")
        .known_as("glGenBuffersARB"),
        FunctionSpec::names(
            "void",
            &["glGenerateMipmapEXT", "glGenerateMipmap"],
            "GLenum target",
        ),
        FunctionSpec::names("void", &["glGenFencesNV"], "GLsizei n, GLuint* fences"),
        FunctionSpec::names(
            "void",
            &["glGenFramebuffersEXT", "glGenFramebuffers"],
            "GLsizei n, GLuint* framebuffers",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glGenQueries"),
                VersionSpec::core("glGenQueriesARB"),
                VersionSpec::ext("glGenQueriesEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLsizei n, GLuint* ids",
        ),
        FunctionSpec::names(
            "void",
            &["glGenRenderbuffersEXT", "glGenRenderbuffers"],
            "GLsizei n, GLuint* renderbuffers",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glGenSamplers", &["GL_ARB_sampler_objects"]),
            ],
            "GLsizei n, GLuint* samplers",
        ),
        FunctionSpec::names("void", &["glGenTextures"], "GLsizei n, GLuint* textures"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glGenTransformFeedbacks", &["GL_ARB_transform_feedback2"]),
            ],
            "GLsizei n, GLuint* ids",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glGenVertexArrays", &["GL_ARB_vertex_array_object"]),
                VersionSpec::core("glGenVertexArraysOES"),
                VersionSpec::ext("glGenVertexArraysAPPLE", &["GL_APPLE_vertex_array_object"]),
            ],
            "GLsizei n, GLuint* arrays",
        )
        .known_as("glGenVertexArraysOES"),
        FunctionSpec::names(
            "void",
            &["glGetActiveAttrib"],
            "GLuint program, GLuint index, GLsizei bufsize, GLsizei* length, GLint* size, GLenum* type, char* name",
        ),
        FunctionSpec::names(
            "GLint",
            &["glGetAttribLocation"],
            "GLuint program, const char* name",
        ),
        FunctionSpec::names("void", &["glGetBooleanv"], "GLenum pname, GLboolean* params"),
        FunctionSpec::names(
            "void",
            &["glGetBufferParameteriv"],
            "GLenum target, GLenum pname, GLint* params",
        ),
        FunctionSpec::versions(
            "GLuint",
            vec![
                VersionSpec::core("glGetDebugMessageLog"),
                VersionSpec::ext("glGetDebugMessageLogKHR", &["GL_KHR_debug"]),
            ],
            "GLuint count, GLsizei bufSize, GLenum* sources, GLenum* types, GLuint* ids, GLenum* severities, GLsizei* lengths, char* messageLog",
        ),
        FunctionSpec::names("GLenum", &["glGetError"], "void")
        .logging(r#"  GL_SERVICE_LOG("GL_RESULT: " << GLEnums::GetStringError(result));"#),
        FunctionSpec::names(
            "void",
            &["glGetFenceivNV"],
            "GLuint fence, GLenum pname, GLint* params",
        ),
        FunctionSpec::names("void", &["glGetFloatv"], "GLenum pname, GLfloat* params"),
        FunctionSpec::versions(
            "GLint",
            vec![
                VersionSpec::core("glGetFragDataLocation"),
            ],
            "GLuint program, const char* name",
        ),
        FunctionSpec::names(
            "GLenum",
            &["glGetGraphicsResetStatusARB", "glGetGraphicsResetStatusKHR", "glGetGraphicsResetStatusEXT", "glGetGraphicsResetStatus"],
            "void",
        ),
        FunctionSpec::names("void", &["glGetInteger64v"], "GLenum pname, GLint64* params"),
        FunctionSpec::names("void", &["glGetIntegerv"], "GLenum pname, GLint* params"),
        FunctionSpec::names(
            "void",
            &["glGetProgramInfoLog"],
            "GLuint program, GLsizei bufsize, GLsizei* length, char* infolog",
        ),
        FunctionSpec::names(
            "void",
            &["glGetProgramiv"],
            "GLuint program, GLenum pname, GLint* params",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glGetQueryiv"),
                VersionSpec::core("glGetQueryivARB"),
                VersionSpec::ext("glGetQueryivEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLenum target, GLenum pname, GLint* params",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glGetQueryObjectuiv"),
                VersionSpec::core("glGetQueryObjectuivARB"),
                VersionSpec::ext("glGetQueryObjectuivEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLuint id, GLenum pname, GLuint* params",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glGetSamplerParameteriv", &["GL_ARB_sampler_objects"]),
            ],
            "GLuint sampler, GLenum pname, GLint* params",
        ),
        FunctionSpec::names(
            "void",
            &["glGetShaderInfoLog"],
            "GLuint shader, GLsizei bufsize, GLsizei* length, char* infolog",
        ),
        FunctionSpec::names(
            "void",
            &["glGetShaderiv"],
            "GLuint shader, GLenum pname, GLint* params",
        ),
        FunctionSpec::names(
            "void",
            &["glGetShaderSource"],
            "GLuint shader, GLsizei bufsize, GLsizei* length, char* source",
        ),
        FunctionSpec::names("const GLubyte*", &["glGetString"], "GLenum name"),
        FunctionSpec::versions(
            "const GLubyte*",
            vec![
                VersionSpec::ext("glGetStringi", &["GL_CHROMIUM_glgetstringi_hack"]),
            ],
            "GLenum name, GLuint index",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glGetSynciv", &["GL_ARB_sync"]),
            ],
            "GLsync sync, GLenum pname, GLsizei bufSize, GLsizei* length,GLint* values",
        ),
        FunctionSpec::names(
            "void",
            &["glGetTexParameteriv"],
            "GLenum target, GLenum pname, GLint* params",
        ),
        FunctionSpec::names(
            "void",
            &["glGetTranslatedShaderSourceANGLE"],
            "GLuint shader, GLsizei bufsize, GLsizei* length, char* source",
        ),
        FunctionSpec::names(
            "void",
            &["glGetUniformfv"],
            "GLuint program, GLint location, GLfloat* params",
        ),
        FunctionSpec::names(
            "void",
            &["glGetUniformiv"],
            "GLuint program, GLint location, GLint* params",
        ),
        FunctionSpec::names(
            "GLint",
            &["glGetUniformLocation"],
            "GLuint program, const char* name",
        ),
        FunctionSpec::names(
            "void",
            &["glGetVertexAttribPointerv"],
            "GLuint index, GLenum pname, void** pointer",
        ),
        FunctionSpec::names("void", &["glHint"], "GLenum target, GLenum mode"),
        FunctionSpec::names("GLboolean", &["glIsBuffer"], "GLuint buffer"),
        FunctionSpec::names("GLboolean", &["glIsEnabled"], "GLenum cap"),
        FunctionSpec::names("GLboolean", &["glIsProgram"], "GLuint program"),
        FunctionSpec::versions(
            "GLboolean",
            vec![
                VersionSpec::core("glIsQuery"),
                VersionSpec::core("glIsQueryARB"),
                VersionSpec::ext("glIsQueryEXT", &["GL_EXT_occlusion_query_boolean"]),
            ],
            "GLuint query",
        ),
        FunctionSpec::versions(
            "GLboolean",
            vec![
                VersionSpec::ext("glIsSync", &["GL_ARB_sync"]),
            ],
            "GLsync sync",
        ),
        FunctionSpec::names("GLboolean", &["glIsTexture"], "GLuint texture"),
        FunctionSpec::names("void", &["glLineWidth"], "GLfloat width"),
        FunctionSpec::names("void", &["glLinkProgram"], "GLuint program"),
        FunctionSpec::names(
            "void*",
            &["glMapBufferOES", "glMapBuffer"],
            "GLenum target, GLenum access",
        )
        .known_as("glMapBuffer"),
        FunctionSpec::versions(
            "void*",
            vec![
                VersionSpec::ext("glMapBufferRange", &["GL_ARB_map_buffer_range"]),
                VersionSpec::ext("glMapBufferRangeEXT", &["GL_EXT_map_buffer_range"]),
            ],
            "GLenum target, GLintptr offset, GLsizeiptr length, GLbitfield access",
        )
        .known_as("glMapBufferRange"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glPauseTransformFeedback", &["GL_ARB_transform_feedback2"]),
            ],
            "void",
        ),
        FunctionSpec::names("void", &["glPixelStorei"], "GLenum pname, GLint param"),
        FunctionSpec::names("void", &["glPolygonMode"], "GLenum face, GLenum mode"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glPopDebugGroup"),
                VersionSpec::ext("glPopDebugGroupKHR", &["GL_KHR_debug"]),
            ],
            "",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glProgramPathFragmentInputGenNV", &["GL_NV_path_rendering"]),
                VersionSpec::ext("glProgramPathFragmentInputGenCHROMIUM", &["GL_CHROMIUM_path_rendering"]),
            ],
            "GLuint program, GLint location, GLenum genMode, GLint components, const GLfloat* coeffs",
        )
        .optional(),
        FunctionSpec::names(
            "void",
            &["glProgramUniform1f"],
            "GLuint program, GLint location, GLfloat v0",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glPushDebugGroup"),
                VersionSpec::ext("glPushDebugGroupKHR", &["GL_KHR_debug"]),
            ],
            "GLenum source, GLuint id, GLsizei length, const char* message",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glQueryCounter", &["GL_ARB_timer_query"]),
                VersionSpec::core("glQueryCounterEXT"),
            ],
            "GLuint id, GLenum target",
        ),
        FunctionSpec::names("void", &["glReadBuffer"], "GLenum src"),
        FunctionSpec::names(
            "void",
            &["glReadPixels"],
            "GLint x, GLint y, GLsizei width, GLsizei height, GLenum format, GLenum type, void* pixels",
        ),
        FunctionSpec::names("void", &["glReleaseShaderCompiler"], "void"),
        FunctionSpec::names(
            "void",
            &["glRenderbufferStorageEXT", "glRenderbufferStorage"],
            "GLenum target, GLenum internalformat, GLsizei width, GLsizei height",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glRenderbufferStorageMultisample", &["GL_ARB_framebuffer_object"]),
                VersionSpec::core("glRenderbufferStorageMultisampleANGLE"),
                VersionSpec::ext("glRenderbufferStorageMultisampleEXT", &["GL_EXT_framebuffer_multisample"]).explicit_only(),
            ],
            "GLenum target, GLsizei samples, GLenum internalformat, GLsizei width, GLsizei height",
        ),
        FunctionSpec::names("void", &["glSampleCoverage"], "GLclampf value, GLboolean invert"),
        FunctionSpec::names(
            "void",
            &["glScissor"],
            "GLint x, GLint y, GLsizei width, GLsizei height",
        ),
        FunctionSpec::names("void", &["glSetFenceNV"], "GLuint fence, GLenum condition"),
        FunctionSpec::names(
            "void",
            &["glShaderBinary"],
            "GLsizei n, const GLuint* shaders, GLenum binaryformat, const void* binary, GLsizei length",
        ),
        FunctionSpec::names(
            "void",
            &["glShaderSource"],
            "GLuint shader, GLsizei count, const char* const* str, const GLint* length",
        )
        .logging(r#"  GL_SERVICE_LOG_CODE_BLOCK({
    for (GLsizei ii = 0; ii < count; ++ii) {
      if (str[ii]) {
        if (length && length[ii] >= 0) {
          std::string source(str[ii], length[ii]);
          GL_SERVICE_LOG("  " << ii << ": ---\n" << source << "\n---");
        } else {
          GL_SERVICE_LOG("  " << ii << ": ---\n" << str[ii] << "\n---");
        }
      } else {
        GL_SERVICE_LOG("  " << ii << ": NULL");
      }
    }
  });"#),
        FunctionSpec::names("void", &["glStencilFunc"], "GLenum func, GLint ref, GLuint mask"),
        FunctionSpec::names(
            "void",
            &["glStencilFuncSeparate"],
            "GLenum face, GLenum func, GLint ref, GLuint mask",
        ),
        FunctionSpec::names("void", &["glStencilMask"], "GLuint mask"),
        FunctionSpec::names("void", &["glStencilMaskSeparate"], "GLenum face, GLuint mask"),
        FunctionSpec::names("void", &["glStencilOp"], "GLenum fail, GLenum zfail, GLenum zpass"),
        FunctionSpec::names(
            "void",
            &["glStencilOpSeparate"],
            "GLenum face, GLenum fail, GLenum zfail, GLenum zpass",
        ),
        FunctionSpec::names("GLboolean", &["glTestFenceNV"], "GLuint fence"),
        FunctionSpec::names(
            "void",
            &["glTexBuffer", "glTexBufferOES", "glTexBufferEXT"],
            "GLenum target, GLenum internalformat, GLuint buffer",
        ),
        FunctionSpec::names(
            "void",
            &["glTexImage2D"],
            "GLenum target, GLint level, GLint internalformat, GLsizei width, GLsizei height, GLint border, GLenum format, GLenum type, const void* pixels",
        ),
        FunctionSpec::names(
            "void",
            &["glTexParameterf"],
            "GLenum target, GLenum pname, GLfloat param",
        ),
        FunctionSpec::names(
            "void",
            &["glTexParameterfv"],
            "GLenum target, GLenum pname, const GLfloat* params",
        ),
        FunctionSpec::names(
            "void",
            &["glTexParameteri"],
            "GLenum target, GLenum pname, GLint param",
        ),
        FunctionSpec::names(
            "void",
            &["glTexParameteriv"],
            "GLenum target, GLenum pname, const GLint* params",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glTexStorage2D", &["GL_ARB_texture_storage"]),
                VersionSpec::ext("glTexStorage2DEXT", &["GL_EXT_texture_storage"]),
            ],
            "GLenum target, GLsizei levels, GLenum internalformat, GLsizei width, GLsizei height",
        )
        .known_as("glTexStorage2DEXT"),
        FunctionSpec::names(
            "void",
            &["glTexSubImage2D"],
            "GLenum target, GLint level, GLint xoffset, GLint yoffset, GLsizei width, GLsizei height, GLenum format, GLenum type, const void* pixels",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glTransformFeedbackVaryings"),
                VersionSpec::core("glTransformFeedbackVaryingsEXT"),
            ],
            "GLuint program, GLsizei count, const char* const* varyings, GLenum bufferMode",
        ),
        FunctionSpec::names("void", &["glUniform1f"], "GLint location, GLfloat x"),
        FunctionSpec::names(
            "void",
            &["glUniform1fv"],
            "GLint location, GLsizei count, const GLfloat* v",
        ),
        FunctionSpec::names("void", &["glUniform1i"], "GLint location, GLint x"),
        FunctionSpec::names(
            "void",
            &["glUniform1iv"],
            "GLint location, GLsizei count, const GLint* v",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glUniform1ui"),
            ],
            "GLint location, GLuint v0",
        ),
        FunctionSpec::names("void", &["glUniform2f"], "GLint location, GLfloat x, GLfloat y"),
        FunctionSpec::names(
            "void",
            &["glUniform4f"],
            "GLint location, GLfloat x, GLfloat y, GLfloat z, GLfloat w",
        ),
        FunctionSpec::names(
            "void",
            &["glUniformMatrix2fv"],
            "GLint location, GLsizei count, GLboolean transpose, const GLfloat* value",
        ),
        FunctionSpec::names(
            "void",
            &["glUniformMatrix4fv"],
            "GLint location, GLsizei count, GLboolean transpose, const GLfloat* value",
        ),
        FunctionSpec::names(
            "GLboolean",
            &["glUnmapBufferOES", "glUnmapBuffer"],
            "GLenum target",
        )
        .known_as("glUnmapBuffer"),
        FunctionSpec::names("void", &["glUseProgram"], "GLuint program"),
        FunctionSpec::names("void", &["glValidateProgram"], "GLuint program"),
        FunctionSpec::names("void", &["glVertexAttrib1f"], "GLuint indx, GLfloat x"),
        FunctionSpec::names(
            "void",
            &["glVertexAttrib4f"],
            "GLuint indx, GLfloat x, GLfloat y, GLfloat z, GLfloat w",
        ),
        FunctionSpec::names(
            "void",
            &["glVertexAttribDivisorARB", "glVertexAttribDivisorANGLE", "glVertexAttribDivisorEXT", "glVertexAttribDivisor"],
            "GLuint index, GLuint divisor",
        )
        .known_as("glVertexAttribDivisorANGLE"),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::core("glVertexAttribIPointer"),
            ],
            "GLuint indx, GLint size, GLenum type, GLsizei stride, const void* ptr",
        ),
        FunctionSpec::names(
            "void",
            &["glVertexAttribPointer"],
            "GLuint indx, GLint size, GLenum type, GLboolean normalized, GLsizei stride, const void* ptr",
        ),
        FunctionSpec::names(
            "void",
            &["glViewport"],
            "GLint x, GLint y, GLsizei width, GLsizei height",
        ),
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glWaitSync", &["GL_ARB_sync"]),
            ],
            "GLsync sync, GLbitfield flags, GLuint64 timeout",
        ),
        FunctionSpec::names(
            "void",
            &["glWindowRectanglesEXT"],
            "GLenum mode, GLsizei n, const GLint* box",
        ),
    ]
}
